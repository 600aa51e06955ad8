//! Format-specific `fpm` arguments.
//!
//! deb, rpm and pacman share one shape: output file, ownership, lifecycle
//! hooks and the systemd unit marked as a config file. osxpkg only gets an
//! output file and a type.

use std::path::PathBuf;
use tracing::debug;

use super::PackageFormat;
use crate::common::copy_file_with_dirs;
use crate::error::{PackageError, PackageResult};
use crate::layout::PathLayout;
use crate::metadata::PackageDescriptor;

/// Lifecycle hooks under `<scriptdir>/package/`, keyed by `fpm` flag.
pub const HOOKS: [(&str, &str); 3] = [
    ("--after-install", "postinstall"),
    ("--after-remove", "postremove"),
    ("--before-remove", "preremove"),
];

/// Service units shipped with Linux packages.
pub const SERVICE_UNITS: [&str; 1] = ["redisinsight.service"];

/// Inputs for one format-specific build.
#[derive(Debug, Clone, Copy)]
pub struct FormatInputs<'a> {
    pub descriptor: &'a PackageDescriptor,
    pub layout: &'a PathLayout,
    pub arch: &'a str,
    pub build_number: u32,
    pub distribution: &'a str,
}

impl FormatInputs<'_> {
    /// Package file name, e.g. `redisinsight-web-2.0.0-5.bionic.x86_64.deb`.
    ///
    /// osxpkg names carry no architecture.
    pub fn output_name(&self, format: PackageFormat) -> String {
        let d = self.descriptor;
        match format {
            PackageFormat::Osxpkg => format!(
                "{}-{}-{}.{}.{}",
                d.product,
                d.version,
                self.build_number,
                self.distribution,
                format.extension()
            ),
            _ => format!(
                "{}-{}-{}.{}.{}.{}",
                d.product,
                d.version,
                self.build_number,
                self.distribution,
                self.arch,
                format.extension()
            ),
        }
    }
}

/// Append the arguments for `format` to `args`.
pub fn format_args(
    format: PackageFormat,
    mut args: Vec<String>,
    inputs: &FormatInputs<'_>,
) -> PackageResult<Vec<String>> {
    match format {
        PackageFormat::Deb => deb(&mut args, inputs)?,
        PackageFormat::Rpm => rpm(&mut args, inputs)?,
        PackageFormat::Pacman => pacman(&mut args, inputs)?,
        PackageFormat::Osxpkg => osxpkg(&mut args, inputs),
    }
    Ok(args)
}

fn push(args: &mut Vec<String>, flag: &str, value: impl Into<String>) {
    args.push(flag.to_string());
    args.push(value.into());
}

fn deb(args: &mut Vec<String>, inputs: &FormatInputs<'_>) -> PackageResult<()> {
    let d = inputs.descriptor;
    push(args, "-p", inputs.output_name(PackageFormat::Deb));
    push(args, "--deb-user", &d.product_user);
    push(args, "--deb-group", &d.product_group);
    push(args, "--deb-dist", inputs.distribution);
    push(args, "-t", "deb");
    push_hooks(args, inputs.layout);
    install_services(args, inputs.layout)
}

fn rpm(args: &mut Vec<String>, inputs: &FormatInputs<'_>) -> PackageResult<()> {
    let d = inputs.descriptor;
    push(args, "-p", inputs.output_name(PackageFormat::Rpm));
    push(args, "--rpm-user", &d.product_user);
    push(args, "--rpm-group", &d.product_group);
    push(args, "--rpm-dist", inputs.distribution);
    push(args, "-t", "rpm");
    push_hooks(args, inputs.layout);
    install_services(args, inputs.layout)
}

// fpm has no pacman distribution tag; the distribution only appears in the
// output file name.
fn pacman(args: &mut Vec<String>, inputs: &FormatInputs<'_>) -> PackageResult<()> {
    let d = inputs.descriptor;
    push(args, "-p", inputs.output_name(PackageFormat::Pacman));
    push_hooks(args, inputs.layout);
    push(args, "--pacman-user", &d.product_user);
    push(args, "--pacman-group", &d.product_group);
    push(args, "--pacman-compression", "gz");
    push(args, "-t", "pacman");
    install_services(args, inputs.layout)
}

fn osxpkg(args: &mut Vec<String>, inputs: &FormatInputs<'_>) {
    push(args, "-p", inputs.output_name(PackageFormat::Osxpkg));
    push(args, "-t", "osxpkg");
}

fn push_hooks(args: &mut Vec<String>, layout: &PathLayout) {
    for (flag, script) in HOOKS {
        push(args, flag, layout.hook(script).to_string_lossy());
    }
}

/// Copy each unit template into the service directory and mark it as a
/// config file so upgrades keep local edits.
fn install_services(args: &mut Vec<String>, layout: &PathLayout) -> PackageResult<()> {
    for unit in SERVICE_UNITS {
        let src = layout.service_template(unit);
        if !src.is_file() {
            return Err(PackageError::MissingSource {
                what: "service unit template",
                path: src,
            });
        }
        let dst: PathBuf = layout.svcdir.join(unit);
        copy_file_with_dirs(&src, &dst)?;
        debug!(unit, dest = %dst.display(), "installed service unit");
        push(args, "--config-files", dst.to_string_lossy());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Target;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn descriptor() -> PackageDescriptor {
        PackageDescriptor {
            product: "redisinsight-web".into(),
            version: "2.0.0".into(),
            description: "RedisInsight".into(),
            vendor: "Redis".into(),
            url: "https://redis.io".into(),
            license: "SSPL-1.0".into(),
            email: "redis@redis.io".into(),
            product_user: "nobody".into(),
            product_group: "nogroup".into(),
        }
    }

    fn layout(root: &Path) -> PathLayout {
        PathLayout::new(
            &root.join("build"),
            &root.join("scripts"),
            "redisinsight-web",
            &Target::new("bionic", "x86_64", "Linux"),
        )
    }

    #[test]
    fn test_output_names() {
        let d = descriptor();
        let l = layout(Path::new("/x"));
        let inputs = FormatInputs {
            descriptor: &d,
            layout: &l,
            arch: "x86_64",
            build_number: 5,
            distribution: "bionic",
        };
        assert_eq!(
            inputs.output_name(PackageFormat::Rpm),
            "redisinsight-web-2.0.0-5.bionic.x86_64.rpm"
        );
        assert_eq!(
            inputs.output_name(PackageFormat::Pacman),
            "redisinsight-web-2.0.0-5.bionic.x86_64.pacman"
        );
        assert_eq!(
            inputs.output_name(PackageFormat::Osxpkg),
            "redisinsight-web-2.0.0-5.bionic.osxpkg"
        );
    }

    #[test]
    fn test_empty_distribution_is_not_validated() {
        let d = descriptor();
        let l = layout(Path::new("/x"));
        let inputs = FormatInputs {
            descriptor: &d,
            layout: &l,
            arch: "x86_64",
            build_number: 1,
            distribution: "",
        };
        assert_eq!(
            inputs.output_name(PackageFormat::Deb),
            "redisinsight-web-2.0.0-1..x86_64.deb"
        );
    }

    #[test]
    fn test_missing_service_template_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let d = descriptor();
        let l = layout(tmp.path());
        let inputs = FormatInputs {
            descriptor: &d,
            layout: &l,
            arch: "x86_64",
            build_number: 1,
            distribution: "bionic",
        };
        let err = format_args(PackageFormat::Rpm, Vec::new(), &inputs).unwrap_err();
        assert!(matches!(err, PackageError::MissingSource { what: "service unit template", .. }));
    }

    #[test]
    fn test_pacman_has_compression_and_no_dist_flag() {
        let tmp = TempDir::new().unwrap();
        let d = descriptor();
        let l = layout(tmp.path());
        fs::create_dir_all(l.scriptdir.join("services")).unwrap();
        fs::write(l.service_template("redisinsight.service"), "[Unit]\n").unwrap();
        let inputs = FormatInputs {
            descriptor: &d,
            layout: &l,
            arch: "x86_64",
            build_number: 2,
            distribution: "arch",
        };

        let args = format_args(PackageFormat::Pacman, Vec::new(), &inputs).unwrap();
        let pos = args.iter().position(|a| a == "--pacman-compression").unwrap();
        assert_eq!(args[pos + 1], "gz");
        assert!(!args.iter().any(|a| a.ends_with("-dist")));
        assert!(args.iter().any(|a| a == "--pacman-user"));
    }
}
