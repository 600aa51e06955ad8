//! Packaging tool availability check.

use crate::process;

use super::types::CheckResult;

/// Check the packaging tool is installed and answers `--version`.
pub fn check_packaging_tool(program: &str) -> CheckResult {
    let Some(path) = process::which(program) else {
        return CheckResult::fail(
            program,
            "Not found. Install fpm (gem install fpm) or set STACKPKG_FPM.",
        );
    };

    match process::run(program, ["--version"]) {
        Ok(result) => CheckResult::pass_with(
            program,
            &format!("{} ({})", path.display(), result.stdout_trimmed()),
        ),
        Err(e) => CheckResult::warn(
            program,
            &format!("{} found but --version failed: {}", path.display(), e),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preflight::types::CheckStatus;

    #[test]
    fn test_missing_tool_fails() {
        let result = check_packaging_tool("nonexistent_fpm_12345");
        assert_eq!(result.status, CheckStatus::Fail);
    }

    #[test]
    fn test_present_tool_passes() {
        // echo --version prints "--version" and exits 0
        let result = check_packaging_tool("echo");
        assert_eq!(result.status, CheckStatus::Pass);
    }
}
