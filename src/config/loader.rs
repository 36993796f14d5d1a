//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a tenant's
//! booking settings and staff schedules from YAML files. Every schedule is
//! validated at load time; a schedule that fails validation rejects the whole
//! load, so availability evaluation only ever sees well-formed data.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::availability::validate_staff_schedule;
use crate::error::{EngineError, EngineResult};
use crate::models::{BookingWindowRule, BusinessHours};

use super::types::{StaffMember, TenantConfig};

/// Loads and provides access to one tenant's booking configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/demo-salon/
/// ├── tenant.yaml          # Tenant name, business hours, booking window
/// └── staff/
///     ├── stylist_aya.yaml # One file per staff member
///     └── stylist_rin.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use availability_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/demo-salon").unwrap();
/// let staff = loader.get_staff("stylist_aya").unwrap();
/// println!("Staff: {}", staff.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tenant: TenantConfig,
    staff: HashMap<String, StaffMember>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the tenant's configuration directory
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `tenant.yaml` or the `staff/` directory is missing
    /// - Any file contains invalid YAML
    /// - Any staff schedule fails structural validation
    ///
    /// # Example
    ///
    /// ```no_run
    /// use availability_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/demo-salon")?;
    /// # Ok::<(), availability_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let tenant_path = path.join("tenant.yaml");
        let tenant = Self::load_yaml::<TenantConfig>(&tenant_path)?;

        let staff_dir = path.join("staff");
        let staff = Self::load_staff(&staff_dir)?;

        Ok(Self { tenant, staff })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all staff files from the staff directory, validating each
    /// schedule before it is accepted.
    fn load_staff(staff_dir: &Path) -> EngineResult<HashMap<String, StaffMember>> {
        let staff_dir_str = staff_dir.display().to_string();

        if !staff_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: staff_dir_str,
            });
        }

        let entries = fs::read_dir(staff_dir).map_err(|_| EngineError::ConfigNotFound {
            path: staff_dir_str.clone(),
        })?;

        let mut staff = HashMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: staff_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let member = Self::load_yaml::<StaffMember>(&path)?;

                if let Some(schedule) = &member.schedule {
                    validate_staff_schedule(schedule).map_err(|source| {
                        EngineError::InvalidSchedule {
                            staff_id: member.id.clone(),
                            source,
                        }
                    })?;
                }

                staff.insert(member.id.clone(), member);
            }
        }

        if staff.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no staff files found)", staff_dir_str),
            });
        }

        Ok(staff)
    }

    /// Returns the tenant settings.
    pub fn tenant(&self) -> &TenantConfig {
        &self.tenant
    }

    /// Returns the tenant's business hours.
    pub fn business_hours(&self) -> &BusinessHours {
        &self.tenant.business_hours
    }

    /// Returns the tenant's booking-window rules.
    pub fn booking_window(&self) -> &BookingWindowRule {
        &self.tenant.booking_window
    }

    /// Gets a staff member by id.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use availability_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/demo-salon")?;
    /// let staff = loader.get_staff("stylist_aya")?;
    /// println!("Staff: {}", staff.name);
    /// # Ok::<(), availability_engine::error::EngineError>(())
    /// ```
    pub fn get_staff(&self, id: &str) -> EngineResult<&StaffMember> {
        self.staff
            .get(id)
            .ok_or_else(|| EngineError::StaffNotFound { id: id.to_string() })
    }

    /// Returns all loaded staff members, keyed by id.
    pub fn staff(&self) -> &HashMap<String, StaffMember> {
        &self.staff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/demo-salon"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.tenant().name, "Demo Salon Omotesando");
    }

    #[test]
    fn test_business_hours_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let hours = loader.business_hours();
        assert_eq!(hours.open.to_string(), "10:00");
        assert_eq!(hours.close.to_string(), "18:30");
        assert_eq!(hours.slot_minutes, 30);
    }

    #[test]
    fn test_booking_window_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let rule = loader.booking_window();
        assert_eq!(rule.cutoff_minutes, 60);
        assert_eq!(rule.cancel_minutes, 1440);
        assert_eq!(rule.public_days, 30);
    }

    #[test]
    fn test_get_staff_with_schedule() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let staff = loader.get_staff("stylist_aya").unwrap();
        assert_eq!(staff.name, "Aya");
        let schedule = staff.schedule.as_ref().unwrap();
        assert!(!schedule.weekly.is_empty());
        assert!(!schedule.exceptions.is_empty());
    }

    #[test]
    fn test_get_staff_without_schedule() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        // Kenji has no schedule block at all: availability fails open.
        let staff = loader.get_staff("assistant_kenji").unwrap();
        assert!(staff.schedule.is_none());
    }

    #[test]
    fn test_get_staff_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let result = loader.get_staff("unknown");
        match result {
            Err(EngineError::StaffNotFound { id }) => assert_eq!(id, "unknown"),
            other => panic!("Expected StaffNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_all_staff_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.staff().len(), 3);
        assert!(loader.staff().contains_key("stylist_aya"));
        assert!(loader.staff().contains_key("stylist_rin"));
        assert!(loader.staff().contains_key("assistant_kenji"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("tenant.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_schedule_rejects_the_load() {
        use std::io::Write;

        // Build a throwaway config dir with an inverted working interval.
        let dir = std::env::temp_dir().join(format!(
            "availability-engine-test-{}",
            std::process::id()
        ));
        let staff_dir = dir.join("staff");
        fs::create_dir_all(&staff_dir).unwrap();

        let mut tenant = fs::File::create(dir.join("tenant.yaml")).unwrap();
        writeln!(tenant, "name: Broken Salon").unwrap();

        let mut staff = fs::File::create(staff_dir.join("broken.yaml")).unwrap();
        writeln!(
            staff,
            "id: broken\nname: Broken\nschedule:\n  weekly:\n    monday:\n      enabled: true\n      start: \"19:00\"\n      end: \"10:00\""
        )
        .unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        match result {
            Err(EngineError::InvalidSchedule { staff_id, .. }) => {
                assert_eq!(staff_id, "broken");
            }
            other => panic!("Expected InvalidSchedule error, got {:?}", other),
        }
    }
}
