pub mod args;
pub mod errors;

use serde::{Deserialize, Serialize};
use std::fmt;

use errors::TargetError;

/// A resolved selection of garden, project or seed, shoot and control plane.
///
/// Empty names mean "not targeted". A `Target` can hold any combination;
/// use [`Target::validate`] to check whether the combination makes sense.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    garden: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    project: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    seed: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    shoot: String,
    #[serde(default, skip_serializing_if = "is_false")]
    control_plane: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Target {
    pub fn new(
        garden: impl Into<String>,
        project: impl Into<String>,
        seed: impl Into<String>,
        shoot: impl Into<String>,
    ) -> Self {
        Self {
            garden: garden.into(),
            project: project.into(),
            seed: seed.into(),
            shoot: shoot.into(),
            control_plane: false,
        }
    }

    pub fn with_control_plane(mut self, control_plane: bool) -> Self {
        self.control_plane = control_plane;
        self
    }

    /// Replaces the garden, e.g. to swap a configured alias for its identity.
    pub fn with_garden_name(mut self, garden: impl Into<String>) -> Self {
        self.garden = garden.into();
        self
    }

    pub fn garden_name(&self) -> &str {
        &self.garden
    }

    pub fn project_name(&self) -> &str {
        &self.project
    }

    pub fn seed_name(&self) -> &str {
        &self.seed
    }

    pub fn shoot_name(&self) -> &str {
        &self.shoot
    }

    pub fn control_plane(&self) -> bool {
        self.control_plane
    }

    /// Checks the target for semantic correctness without contacting any cluster.
    pub fn validate(&self) -> Result<(), TargetError> {
        if !self.project.is_empty() && !self.seed.is_empty() {
            return Err(TargetError::SeedAndProject);
        }

        if self.control_plane && self.shoot.is_empty() {
            return Err(TargetError::ControlPlaneWithoutShoot);
        }

        Ok(())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        for (kind, name) in [
            ("garden", &self.garden),
            ("project", &self.project),
            ("seed", &self.seed),
            ("shoot", &self.shoot),
        ] {
            if !name.is_empty() {
                parts.push(format!("{}:{}", kind, name));
            }
        }
        if self.control_plane {
            parts.push("control-plane".to_string());
        }
        write!(f, "{}", parts.join("/"))
    }
}
