//! Arguments shared by every package format.

use crate::layout::{PathLayout, INSTALL_DIR};
use crate::metadata::PackageDescriptor;

/// Ordered `fpm` argument vector for a directory-sourced package.
///
/// Each flag and each value is its own element; free text such as the
/// description is passed through as-is.
pub fn base_args(descriptor: &PackageDescriptor, layout: &PathLayout, arch: &str) -> Vec<String> {
    let mut args: Vec<String> = Vec::with_capacity(26);
    let mut push = |flag: &str, value: &str| {
        args.push(flag.to_string());
        args.push(value.to_string());
    };

    push("-s", "dir");
    push("-C", &layout.workdir.to_string_lossy());
    push("-n", &descriptor.product);
    push("--architecture", arch);
    push("--vendor", &descriptor.vendor);
    push("--version", &descriptor.version);
    push("--url", &descriptor.url);
    push("--license", &descriptor.license);
    push("--category", "server");
    push("--maintainer", &descriptor.email);
    push("--description", &descriptor.description);
    push("--directories", INSTALL_DIR);

    args
}

/// Value following the first occurrence of `flag`, if any.
pub fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}
