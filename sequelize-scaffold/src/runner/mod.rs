//! External toolchain runner
//!
//! Runs an ordered list of external commands inside the project directory,
//! one at a time, with shell-AND semantics: the first step that exits
//! unsuccessfully stops the remaining ones. Child processes inherit the
//! caller's stdin, stdout and stderr so their output is visible live.
//!
//! The default plan bootstraps Sequelize:
//!
//! ```text
//! npm install sequelize sequelize-cli
//! npx sequelize init
//! npx sequelize db:migrate
//! ```
//!
//! A step that cannot be spawned is always an error. A step that runs and
//! exits non-zero is logged, and only reported as an error under
//! [`ExitCodePolicy::Fail`].

use std::fmt;
use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;

use tokio::process::Command;

use crate::config::{ExitCodePolicy, ToolchainSettings};
use crate::error::{describe_code, Result, ScaffoldError};
use crate::logging::ScaffoldLogger;

/// One external program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStep {
    /// Short name used in logs and errors
    pub label: String,
    /// Program to execute (looked up on `PATH`)
    pub program: String,
    /// Arguments, passed without shell interpretation
    pub args: Vec<String>,
}

impl CommandStep {
    /// Create a step
    pub fn new<I, S>(label: impl Into<String>, program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Ordered list of toolchain steps
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolchainPlan {
    steps: Vec<CommandStep>,
}

impl ToolchainPlan {
    /// Create a plan from explicit steps
    #[must_use]
    pub const fn new(steps: Vec<CommandStep>) -> Self {
        Self { steps }
    }

    /// Install, init and migrate plan for Sequelize
    ///
    /// # Examples
    ///
    /// ```
    /// # use sequelize_scaffold::config::ToolchainSettings;
    /// # use sequelize_scaffold::runner::ToolchainPlan;
    /// let plan = ToolchainPlan::sequelize(&ToolchainSettings::default());
    /// let commands: Vec<String> = plan.steps().iter().map(ToString::to_string).collect();
    /// assert_eq!(
    ///     commands,
    ///     vec![
    ///         "npm install sequelize sequelize-cli",
    ///         "npx sequelize init",
    ///         "npx sequelize db:migrate",
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn sequelize(settings: &ToolchainSettings) -> Self {
        let install_args =
            std::iter::once("install".to_string()).chain(settings.packages.iter().cloned());

        Self::new(vec![
            CommandStep::new("install", &settings.install_tool, install_args),
            CommandStep::new("init", &settings.runner, [settings.cli_package.as_str(), "init"]),
            CommandStep::new(
                "migrate",
                &settings.runner,
                [settings.cli_package.as_str(), "db:migrate"],
            ),
        ])
    }

    /// Steps in execution order
    #[must_use]
    pub fn steps(&self) -> &[CommandStep] {
        &self.steps
    }
}

/// Final state of a step after a run that did not fail to spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    /// Skipped because an earlier step failed
    NotStarted,
    /// Ran to completion; `None` when terminated by a signal
    Closed(Option<i32>),
}

impl StepState {
    /// Whether the step ran and exited with code 0
    #[must_use]
    pub const fn succeeded(self) -> bool {
        matches!(self, Self::Closed(Some(0)))
    }
}

/// Per-step outcome of a toolchain run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// `(label, state)` for every planned step
    pub steps: Vec<(String, StepState)>,
}

impl RunReport {
    /// Whether every step exited with code 0
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.steps.iter().all(|(_, state)| state.succeeded())
    }

    /// State of the step with `label`
    #[must_use]
    pub fn state(&self, label: &str) -> Option<StepState> {
        self.steps
            .iter()
            .find(|(step, _)| step == label)
            .map(|(_, state)| *state)
    }
}

/// Executes a [`ToolchainPlan`] inside a project directory
pub struct ToolchainRunner {
    plan: ToolchainPlan,
    policy: ExitCodePolicy,
    logger: Arc<dyn ScaffoldLogger>,
}

impl ToolchainRunner {
    /// Create a runner with the default (tolerant) exit-code policy
    pub fn new(plan: ToolchainPlan, logger: Arc<dyn ScaffoldLogger>) -> Self {
        Self {
            plan,
            policy: ExitCodePolicy::default(),
            logger,
        }
    }

    /// Create a runner for the Sequelize plan described by `settings`
    pub fn from_settings(settings: &ToolchainSettings, logger: Arc<dyn ScaffoldLogger>) -> Self {
        Self::new(ToolchainPlan::sequelize(settings), logger).with_policy(settings.exit_code_policy)
    }

    /// Set the exit-code policy
    #[must_use]
    pub fn with_policy(mut self, policy: ExitCodePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The plan this runner executes
    #[must_use]
    pub const fn plan(&self) -> &ToolchainPlan {
        &self.plan
    }

    /// Run the plan, discarding the per-step report
    ///
    /// # Errors
    ///
    /// See [`ToolchainRunner::execute`].
    pub async fn run(&self, project_dir: &Path) -> Result<()> {
        self.execute(project_dir).await.map(drop)
    }

    /// Run the plan and report what happened to each step
    ///
    /// Waits for each child to exit on its own; there is no timeout and
    /// children are never killed.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Spawn`] if a step could not be started (for
    /// example a missing program or project directory), and
    /// [`ScaffoldError::StepFailed`] for a non-zero exit under
    /// [`ExitCodePolicy::Fail`].
    pub async fn execute(&self, project_dir: &Path) -> Result<RunReport> {
        let mut report = RunReport {
            steps: self
                .plan
                .steps()
                .iter()
                .map(|step| (step.label.clone(), StepState::NotStarted))
                .collect(),
        };

        for (index, step) in self.plan.steps().iter().enumerate() {
            self.logger.info(&format!("running `{step}` in {}", project_dir.display()));

            let code = self.run_step(step, project_dir).await?;
            report.steps[index].1 = StepState::Closed(code);

            self.logger.info(&format!(
                "child process exited with code {}",
                code.map_or_else(|| "null".to_string(), |code| code.to_string())
            ));

            if code != Some(0) {
                let skipped = self.plan.steps().len() - index - 1;
                if skipped > 0 {
                    self.logger.warn(&format!(
                        "`{}` failed with {}; skipping {skipped} remaining step(s)",
                        step.label,
                        describe_code(code)
                    ));
                }

                return match self.policy {
                    ExitCodePolicy::Tolerate => Ok(report),
                    ExitCodePolicy::Fail => Err(ScaffoldError::StepFailed {
                        step: step.label.clone(),
                        code,
                    }),
                };
            }
        }

        Ok(report)
    }

    /// Spawn one step and wait for it; returns its exit code
    async fn run_step(&self, step: &CommandStep, project_dir: &Path) -> Result<Option<i32>> {
        tracing::debug!(step = %step.label, program = %step.program, "spawning toolchain step");

        let spawned = Command::new(&step.program)
            .args(&step.args)
            .current_dir(project_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn();

        let status = match spawned {
            Ok(mut child) => child.wait().await,
            Err(err) => Err(err),
        };

        match status {
            Ok(status) => Ok(status.code()),
            Err(source) => {
                self.logger.error(&format!("failed to run `{step}`: {source}"));
                Err(ScaffoldError::Spawn {
                    program: step.program.clone(),
                    source,
                })
            }
        }
    }
}
