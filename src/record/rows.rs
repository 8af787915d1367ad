//! Row types
//!
//! One flat struct of raw text fields per table.

use crate::error::{FlyDbError, Result};

use super::{Record, Row, TableKey};

/// A scheduled flight
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flight {
    pub time_from: String,
    pub flight_from: String,
    pub flight_to: String,
    pub time_to: String,
}

/// An airport
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Airport {
    pub airport_id: String,
    pub airport_city: String,
    pub airport_name: String,
}

/// A fare for one seat class on one flight
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Price {
    pub flight_id: String,
    pub seat_class: String,
    pub price_value: String,
}

fn malformed<R: Row>(fields: &[&str]) -> FlyDbError {
    FlyDbError::MalformedLine {
        key: R::KEY,
        expected: R::FIELD_COUNT,
        found: fields.len(),
    }
}

impl Row for Flight {
    const KEY: TableKey = TableKey::Flight;
    const FIELD_COUNT: usize = 4;

    fn from_fields(fields: &[&str]) -> Result<Self> {
        match fields {
            [time_from, flight_from, flight_to, time_to, ..] => Ok(Self {
                time_from: time_from.to_string(),
                flight_from: flight_from.to_string(),
                flight_to: flight_to.to_string(),
                time_to: time_to.to_string(),
            }),
            _ => Err(malformed::<Self>(fields)),
        }
    }

    fn fields(&self) -> Vec<&str> {
        vec![
            self.time_from.as_str(),
            self.flight_from.as_str(),
            self.flight_to.as_str(),
            self.time_to.as_str(),
        ]
    }

    fn into_record(self) -> Record {
        Record::Flight(self)
    }

    fn from_record(record: Record) -> Result<Self> {
        match record {
            Record::Flight(flight) => Ok(flight),
            other => Err(FlyDbError::TypeMismatch {
                expected: Self::KEY,
                found: other.key(),
            }),
        }
    }
}

impl Row for Airport {
    const KEY: TableKey = TableKey::Airport;
    const FIELD_COUNT: usize = 3;

    fn from_fields(fields: &[&str]) -> Result<Self> {
        match fields {
            [airport_id, airport_city, airport_name, ..] => Ok(Self {
                airport_id: airport_id.to_string(),
                airport_city: airport_city.to_string(),
                airport_name: airport_name.to_string(),
            }),
            _ => Err(malformed::<Self>(fields)),
        }
    }

    fn fields(&self) -> Vec<&str> {
        vec![
            self.airport_id.as_str(),
            self.airport_city.as_str(),
            self.airport_name.as_str(),
        ]
    }

    fn into_record(self) -> Record {
        Record::Airport(self)
    }

    fn from_record(record: Record) -> Result<Self> {
        match record {
            Record::Airport(airport) => Ok(airport),
            other => Err(FlyDbError::TypeMismatch {
                expected: Self::KEY,
                found: other.key(),
            }),
        }
    }
}

impl Row for Price {
    const KEY: TableKey = TableKey::Price;
    const FIELD_COUNT: usize = 3;

    fn from_fields(fields: &[&str]) -> Result<Self> {
        match fields {
            [flight_id, seat_class, price_value, ..] => Ok(Self {
                flight_id: flight_id.to_string(),
                seat_class: seat_class.to_string(),
                price_value: price_value.to_string(),
            }),
            _ => Err(malformed::<Self>(fields)),
        }
    }

    fn fields(&self) -> Vec<&str> {
        vec![
            self.flight_id.as_str(),
            self.seat_class.as_str(),
            self.price_value.as_str(),
        ]
    }

    fn into_record(self) -> Record {
        Record::Price(self)
    }

    fn from_record(record: Record) -> Result<Self> {
        match record {
            Record::Price(price) => Ok(price),
            other => Err(FlyDbError::TypeMismatch {
                expected: Self::KEY,
                found: other.key(),
            }),
        }
    }
}
