use clap::error::ErrorKind;
use clap::parser::MatchesError;
use clap::{Arg, ArgAction, ArgMatches, Command, FromArgMatches, value_parser};
use tracing::debug;

use super::Target;

pub const GARDEN_FLAG: &str = "garden";
pub const PROJECT_FLAG: &str = "project";
pub const SEED_FLAG: &str = "seed";
pub const SHOOT_FLAG: &str = "shoot";
pub const CONTROL_PLANE_FLAG: &str = "control-plane";

/// The target selection flags shared by commands that operate on a garden,
/// project, seed or shoot.
///
/// Fields are filled in two phases: the `add_*_flag` methods register the
/// flags on a [`Command`], and [`FromArgMatches::update_from_arg_matches`]
/// writes the parsed values back. Only registered flags are written back,
/// so a command that registers a subset leaves the other fields alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetFlags {
    garden_name: String,
    project_name: String,
    seed_name: String,
    shoot_name: String,
    control_plane: bool,
}

impl TargetFlags {
    pub fn new(
        garden: impl Into<String>,
        project: impl Into<String>,
        seed: impl Into<String>,
        shoot: impl Into<String>,
        control_plane: bool,
    ) -> Self {
        Self {
            garden_name: garden.into(),
            project_name: project.into(),
            seed_name: seed.into(),
            shoot_name: shoot.into(),
            control_plane,
        }
    }

    pub fn garden_name(&self) -> &str {
        &self.garden_name
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn seed_name(&self) -> &str {
        &self.seed_name
    }

    pub fn shoot_name(&self) -> &str {
        &self.shoot_name
    }

    pub fn control_plane(&self) -> bool {
        self.control_plane
    }

    /// Registers all target flags on `cmd`.
    pub fn add_flags(&self, cmd: Command) -> Command {
        let cmd = self.add_garden_flag(cmd);
        let cmd = self.add_project_flag(cmd);
        let cmd = self.add_seed_flag(cmd);
        let cmd = self.add_shoot_flag(cmd);
        self.add_control_plane_flag(cmd)
    }

    pub fn add_garden_flag(&self, cmd: Command) -> Command {
        cmd.arg(name_arg(GARDEN_FLAG, "target the given garden cluster"))
    }

    pub fn add_project_flag(&self, cmd: Command) -> Command {
        cmd.arg(name_arg(PROJECT_FLAG, "target the given project"))
    }

    pub fn add_seed_flag(&self, cmd: Command) -> Command {
        cmd.arg(name_arg(SEED_FLAG, "target the given seed cluster"))
    }

    pub fn add_shoot_flag(&self, cmd: Command) -> Command {
        cmd.arg(name_arg(SHOOT_FLAG, "target the given shoot cluster"))
    }

    /// Registers `--control-plane`, defaulting to the current field value.
    ///
    /// Accepts a bare `--control-plane` as well as `--control-plane=true|false`.
    pub fn add_control_plane_flag(&self, cmd: Command) -> Command {
        let default = if self.control_plane { "true" } else { "false" };
        cmd.arg(
            Arg::new(CONTROL_PLANE_FLAG)
                .long(CONTROL_PLANE_FLAG)
                .value_name("BOOL")
                .action(ArgAction::Set)
                .value_parser(value_parser!(bool))
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value("true")
                .default_value(default)
                .hide_possible_values(true)
                .help("target control plane of shoot, use together with shoot argument"),
        )
    }

    pub fn to_target(&self) -> Target {
        Target::new(
            self.garden_name.as_str(),
            self.project_name.as_str(),
            self.seed_name.as_str(),
            self.shoot_name.as_str(),
        )
        .with_control_plane(self.control_plane)
    }

    /// True if the user gave no target flags at all.
    pub fn is_empty(&self) -> bool {
        self.garden_name.is_empty()
            && self.project_name.is_empty()
            && self.seed_name.is_empty()
            && self.shoot_name.is_empty()
            && !self.control_plane
    }

    /// True if the flags are enough to build a meaningful target.
    ///
    /// The garden is always required. Beyond that the decision is
    /// [`Target::validate`]'s; call it directly to learn why a target is rejected.
    pub fn is_target_valid(&self) -> bool {
        if self.garden_name.is_empty() {
            return false;
        }

        self.to_target().validate().is_ok()
    }
}

fn name_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("NAME")
        .action(ArgAction::Set)
        .value_parser(value_parser!(String))
        .default_value("")
        .hide_default_value(true)
        .help(help)
}

// An unregistered id binds nothing and keeps the field as is.
fn bound_value<T: Clone + Send + Sync + 'static>(
    matches: &ArgMatches,
    id: &str,
) -> Result<Option<T>, clap::Error> {
    match matches.try_get_one::<T>(id) {
        Ok(value) => Ok(value.cloned()),
        Err(MatchesError::UnknownArgument { .. }) => Ok(None),
        Err(e) => Err(clap::Error::raw(
            ErrorKind::ValueValidation,
            format!("failed to bind --{}: {}\n", id, e),
        )),
    }
}

impl FromArgMatches for TargetFlags {
    fn from_arg_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let mut flags = Self::default();
        flags.update_from_arg_matches(matches)?;
        Ok(flags)
    }

    fn update_from_arg_matches(&mut self, matches: &ArgMatches) -> Result<(), clap::Error> {
        if let Some(garden) = bound_value::<String>(matches, GARDEN_FLAG)? {
            self.garden_name = garden;
        }
        if let Some(project) = bound_value::<String>(matches, PROJECT_FLAG)? {
            self.project_name = project;
        }
        if let Some(seed) = bound_value::<String>(matches, SEED_FLAG)? {
            self.seed_name = seed;
        }
        if let Some(shoot) = bound_value::<String>(matches, SHOOT_FLAG)? {
            self.shoot_name = shoot;
        }
        if let Some(control_plane) = bound_value::<bool>(matches, CONTROL_PLANE_FLAG)? {
            self.control_plane = control_plane;
        }

        debug!(
            garden = %self.garden_name,
            project = %self.project_name,
            seed = %self.seed_name,
            shoot = %self.shoot_name,
            control_plane = self.control_plane,
            "bound target flags"
        );
        Ok(())
    }
}

impl clap::Args for TargetFlags {
    fn augment_args(cmd: Command) -> Command {
        Self::default().add_flags(cmd)
    }

    fn augment_args_for_update(cmd: Command) -> Command {
        Self::augment_args(cmd)
    }
}

