pub use roster_config::OutputFormat;

/// Flags shared by every code path after argument parsing.
#[derive(Clone, Copy, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}
