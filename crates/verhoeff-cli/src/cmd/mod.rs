/// Command module for the `verhoeff` CLI.
///
/// The binary has a single operation, so there is one submodule. Its `run`
/// function takes the parsed arguments and returns `Ok(())` on success or a
/// [`crate::error::CliError`] on failure.
pub mod check;
