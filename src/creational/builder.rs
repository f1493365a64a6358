//! # Builder
//!
//! Cars are assembled in steps. Every car gets the same necessary parts. A
//! brand-specific [`Factory`] (the builder) then takes optional parts one at a time and
//! finally produces the car with its model name. The [`Agency`] is the director that
//! drives a factory through those steps on behalf of a [`Customer`].

use std::fmt;
use std::io::Write;

use tracing::debug;

use crate::error::Result;

pub const NECESSARY_PARTS: [&str; 8] = [
    "Engine",
    "Drivetrain",
    "Tires",
    "Bumpers",
    "Doors",
    "Exhaust",
    "Headlights",
    "Taillights",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brand {
    Bmw,
    Mercedes,
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Brand::Bmw => f.write_str("BMW"),
            Brand::Mercedes => f.write_str("Mercedes"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    brand: Brand,
    model: Option<String>,
    necessary_parts: Vec<String>,
    optional_parts: Vec<String>,
}

impl Car {
    fn new(brand: Brand) -> Self {
        Self {
            brand,
            model: None,
            necessary_parts: NECESSARY_PARTS.iter().map(ToString::to_string).collect(),
            optional_parts: Vec::new(),
        }
    }

    pub fn brand(&self) -> Brand {
        self.brand
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn necessary_parts(&self) -> &[String] {
        &self.necessary_parts
    }

    pub fn optional_parts(&self) -> &[String] {
        &self.optional_parts
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.model {
            Some(model) => writeln!(f, "{} {}", self.brand, model)?,
            None => writeln!(f, "{}", self.brand)?,
        }

        writeln!(f, "\nNecessary Parts:")?;
        for part in &self.necessary_parts {
            writeln!(f, "{part}")?;
        }

        writeln!(f, "\nOptions:")?;
        for part in &self.optional_parts {
            writeln!(f, "{part}")?;
        }

        writeln!(f, "------------------------------")
    }
}

/// The builder contract.
pub trait Factory {
    fn add_part(&mut self, part: &str);

    /// Finishes the car. Consumes the factory so a car is produced exactly once.
    fn produce(self, model: &str) -> Car;
}

#[derive(Debug, Clone)]
pub struct BmwFactory {
    car: Car,
}

impl Default for BmwFactory {
    fn default() -> Self {
        Self {
            car: Car::new(Brand::Bmw),
        }
    }
}

impl Factory for BmwFactory {
    fn add_part(&mut self, part: &str) {
        self.car.optional_parts.push(part.to_string());
    }

    fn produce(mut self, model: &str) -> Car {
        self.car.model = Some(model.to_string());
        self.car
    }
}

#[derive(Debug, Clone)]
pub struct MercedesFactory {
    car: Car,
}

impl Default for MercedesFactory {
    fn default() -> Self {
        Self {
            car: Car::new(Brand::Mercedes),
        }
    }
}

impl Factory for MercedesFactory {
    fn add_part(&mut self, part: &str) {
        self.car.optional_parts.push(part.to_string());
    }

    fn produce(mut self, model: &str) -> Car {
        self.car.model = Some(model.to_string());
        self.car
    }
}

/// The director.
#[derive(Debug, Default)]
pub struct Agency;

impl Agency {
    pub fn request_bmw(&self, model: &str, requests: &[&str]) -> Car {
        Self::assemble(BmwFactory::default(), model, requests)
    }

    pub fn request_mercedes(&self, model: &str, requests: &[&str]) -> Car {
        Self::assemble(MercedesFactory::default(), model, requests)
    }

    fn assemble(mut factory: impl Factory, model: &str, requests: &[&str]) -> Car {
        for request in requests {
            factory.add_part(request);
        }
        let car = factory.produce(model);
        debug!(brand = %car.brand, model, options = requests.len(), "Car produced");
        car
    }
}

#[derive(Debug)]
pub struct Customer;

impl Customer {
    pub fn request_car(brand: Brand, model: &str, requested_parts: &[&str], out: &mut dyn Write) -> Result<()> {
        let agency = Agency;
        let car = match brand {
            Brand::Mercedes => agency.request_mercedes(model, requested_parts),
            Brand::Bmw => agency.request_bmw(model, requested_parts),
        };
        writeln!(out, "{car}")?;
        Ok(())
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    Customer::request_car(
        Brand::Bmw,
        "M4",
        &["Ceramic Brakes", "Forged Wheels", "Carbon Fibre Spoiler"],
        out,
    )?;

    Customer::request_car(
        Brand::Mercedes,
        "AMG GT",
        &["Gray Metallic Paint", "Burmester Sound System", "Keyless Entry"],
        out,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_car_has_necessary_parts() {
        let car = Agency.request_mercedes("C 300", &[]);
        assert_eq!(car.necessary_parts(), NECESSARY_PARTS.map(String::from).as_slice());
        assert!(car.optional_parts().is_empty());
    }

    #[test]
    fn test_options_kept_in_request_order() {
        let car = Agency.request_bmw("M4", &["Forged Wheels", "Ceramic Brakes"]);
        assert_eq!(car.brand(), Brand::Bmw);
        assert_eq!(car.model(), Some("M4"));
        assert_eq!(car.optional_parts(), ["Forged Wheels", "Ceramic Brakes"]);
    }

    #[test]
    fn test_display_without_model_shows_brand_only() {
        let car = Car::new(Brand::Mercedes);
        let rendered = car.to_string();
        assert!(rendered.starts_with("Mercedes\n\nNecessary Parts:\nEngine\n"));
        assert!(rendered.ends_with("Taillights\n\nOptions:\n------------------------------\n"));
    }
}
