use std::{
    io::ErrorKind,
    process::{ExitStatus, Stdio},
};

use thiserror::Error;
use tokio::{
    io::AsyncWriteExt,
    process::{ChildStdin, Command},
};
use tracing::debug;
use waybill_core::{
    error::AssignmentError,
    json::data_model::JsonDataModel,
    problem::data_model::SolverDataModel,
    solver::{
        recorded_assignment::{RecordedAssignment, RecordedSolution},
        solver_adapter::SolverAdapter,
    },
};

#[derive(Error, Debug)]
pub enum ProcessSolverError {
    #[error("failed to run solver `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("solver I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("solver exited with {status}: {stderr}")]
    Status { status: ExitStatus, stderr: String },

    #[error("failed to serialize data model: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("solver answer is not a recorded solution: {0}")]
    Decode(#[source] serde_json::Error),

    #[error(transparent)]
    Assignment(#[from] AssignmentError),
}

/// Solver running as a child process.
///
/// The JSON data model is written to its stdin and a recorded solution, or
/// `null`, is read back from its stdout. The child is killed when the
/// returned future is dropped.
pub struct ProcessSolver {
    program: String,
    args: Vec<String>,
}

impl ProcessSolver {
    pub fn new(program: String, args: Vec<String>) -> Self {
        ProcessSolver { program, args }
    }
}

impl SolverAdapter for ProcessSolver {
    type Assignment = RecordedAssignment;
    type Error = ProcessSolverError;

    async fn solve(
        &self,
        model: &SolverDataModel,
    ) -> Result<Option<RecordedAssignment>, ProcessSolverError> {
        let payload =
            serde_json::to_vec(&JsonDataModel::from(model)).map_err(ProcessSolverError::Encode)?;

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ProcessSolverError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        debug!(program = %self.program, bytes = payload.len(), "Spawned solver");

        // A solver may answer without reading the whole model, the exit status
        // and stdout decide the outcome then.
        let stdin = child.stdin.take();
        let write_input = async move {
            let Some(mut stdin) = stdin else {
                return Ok(());
            };

            match write_model(&mut stdin, &payload).await {
                Err(error) if error.kind() == ErrorKind::BrokenPipe => {
                    debug!("Solver closed its input early");
                    Ok(())
                }
                result => result,
            }
        };

        let (_, output) = tokio::try_join!(write_input, child.wait_with_output())?;

        if !output.status.success() {
            return Err(ProcessSolverError::Status {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        let solution: Option<RecordedSolution> =
            serde_json::from_slice(&output.stdout).map_err(ProcessSolverError::Decode)?;

        Ok(solution
            .map(|solution| RecordedAssignment::new(solution, model))
            .transpose()?)
    }
}

async fn write_model(stdin: &mut ChildStdin, payload: &[u8]) -> std::io::Result<()> {
    stdin.write_all(payload).await?;
    stdin.shutdown().await
}
