//! Canned deploy tool output.

/// Output in the `View at:` format
pub const MARKER_OUTPUT: &str = "\
✔ Deploying to project toriexperiments.
✔ Deployment complete.

View at:
 - https://toriexperiments-abc123.deno.dev
 - https://toriexperiments.deno.dev";

/// Output whose last line carries the URL
pub const TAIL_OUTPUT: &str = "\
Uploading 1 file
Deployed Functions - https://toriexperiments.deno.dev";
