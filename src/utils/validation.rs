use crate::domain::catalog::Catalog;
use crate::domain::model::Vehicle;
use crate::utils::error::{CatalogError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CatalogError::InvalidValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    validate_finite(field_name, value)?;

    if value < 0.0 {
        return Err(CatalogError::InvalidValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be at least 0".to_string(),
        });
    }
    Ok(())
}

impl Validate for Vehicle {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("color", &self.color)?;
        validate_non_empty_string("model", &self.model)?;

        if let Some(top_speed) = self.top_speed {
            validate_non_negative("topSpeed", top_speed)?;
        }

        Ok(())
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        for (index, vehicle) in self.iter().enumerate() {
            vehicle.validate().map_err(|e| CatalogError::RecordError {
                index,
                source: Box::new(e),
            })?;
        }

        tracing::debug!("Validated {} vehicles", self.len());
        Ok(())
    }
}
