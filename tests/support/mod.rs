// ABOUTME: Test support utilities.
// ABOUTME: Provides a scripted CommandRunner and tracing setup for integration tests.

use async_trait::async_trait;
use stackship::remote::{CommandLine, CommandRunner, OutputMode, RemoteCommandError};
use std::future::Future;
use std::sync::{Mutex, Once};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env().add_directive("stackship=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Drive a future to completion on a fresh current-thread runtime.
///
/// Lets async deploy steps run inside `temp_env` closures.
#[allow(dead_code)]
pub fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

/// One command seen by a [`ScriptedRunner`].
#[derive(Debug, Clone)]
pub struct Call {
    pub command: CommandLine,
    pub mode: OutputMode,
}

impl Call {
    /// The remote shell string for ssh calls, or the full command line otherwise.
    pub fn remote_or_full(&self) -> String {
        if self.command.program() == "ssh" {
            self.command.get_args().last().cloned().unwrap_or_default()
        } else {
            self.command.to_string()
        }
    }
}

/// Records every command and answers from a script instead of spawning processes.
pub struct ScriptedRunner {
    calls: Mutex<Vec<Call>>,
    listing: String,
    fail_on: Option<String>,
}

#[allow(dead_code)]
impl ScriptedRunner {
    /// Every command succeeds; captured commands print `listing`.
    pub fn succeeding(listing: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            listing: listing.to_string(),
            fail_on: None,
        }
    }

    /// Like [`succeeding`](Self::succeeding), but any command whose rendered
    /// form contains `needle` exits with status 255.
    pub fn failing_on(needle: &str) -> Self {
        Self {
            fail_on: Some(needle.to_string()),
            ..Self::succeeding("0")
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Remote shell strings (or full rsync lines) in call order.
    pub fn transcript(&self) -> Vec<String> {
        self.calls().iter().map(Call::remote_or_full).collect()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn execute(
        &self,
        command: &CommandLine,
        mode: OutputMode,
    ) -> Result<Option<String>, RemoteCommandError> {
        self.calls.lock().unwrap().push(Call {
            command: command.clone(),
            mode,
        });

        if let Some(needle) = &self.fail_on
            && command.to_string().contains(needle.as_str())
        {
            return Err(RemoteCommandError::Exit {
                command: command.clone(),
                status: "exit status: 255".to_string(),
                stderr: "ssh: connect to host swarm.example.com port 61111: Connection refused"
                    .to_string(),
            });
        }

        Ok(match mode {
            OutputMode::Capture => Some(self.listing.clone()),
            OutputMode::Inherit => None,
        })
    }
}
