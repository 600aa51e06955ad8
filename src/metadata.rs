//! Package metadata catalog.
//!
//! A TOML file of shared keys (`vendor`, `url`, `license`, `email`,
//! `product_user`, `product_group`) plus one table per package name holding
//! `product`, `version` and `description`:
//!
//! ```toml
//! vendor = "Redis"
//! url = "https://redis.io"
//! license = "SSPL-1.0"
//! email = "redis@redis.io"
//! product_user = "nobody"
//! product_group = "nogroup"
//!
//! [redisinsight-web]
//! product = "redisinsight-web"
//! version = "2.0.0"
//! description = "RedisInsight web interface"
//! ```

use std::fs;
use std::path::Path;

use crate::error::{PackageError, PackageResult};

/// Key-value lookup over the metadata file.
#[derive(Debug, Clone)]
pub struct Catalog {
    table: toml::Table,
}

impl Catalog {
    /// Read and parse the catalog file.
    pub fn load(path: &Path) -> PackageResult<Self> {
        if !path.is_file() {
            return Err(PackageError::MissingSource {
                what: "metadata catalog",
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> PackageResult<Self> {
        let table: toml::Table = content.parse()?;
        Ok(Self { table })
    }

    /// Look up a top-level key, which may be a scalar or a package table.
    pub fn get(&self, key: &str) -> PackageResult<&toml::Value> {
        self.table
            .get(key)
            .ok_or_else(|| PackageError::MissingKey(key.to_string()))
    }

    fn get_str(&self, key: &str) -> PackageResult<String> {
        as_string(key, self.get(key)?)
    }

    /// Resolve a fresh descriptor snapshot for `package`.
    pub fn descriptor(&self, package: &str) -> PackageResult<PackageDescriptor> {
        let record = self
            .get(package)?
            .as_table()
            .ok_or_else(|| PackageError::InvalidValue {
                key: package.to_string(),
                expected: "table",
            })?;

        let field = |name: &str| {
            let key = format!("{}.{}", package, name);
            record
                .get(name)
                .ok_or_else(|| PackageError::MissingKey(key.clone()))
                .and_then(|v| as_string(&key, v))
        };

        Ok(PackageDescriptor {
            product: field("product")?,
            version: field("version")?,
            description: field("description")?,
            vendor: self.get_str("vendor")?,
            url: self.get_str("url")?,
            license: self.get_str("license")?,
            email: self.get_str("email")?,
            product_user: self.get_str("product_user")?,
            product_group: self.get_str("product_group")?,
        })
    }
}

fn as_string(key: &str, value: &toml::Value) -> PackageResult<String> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        // Numbers are not coerced; `version = 2.0` must be quoted
        _ => Err(PackageError::InvalidValue {
            key: key.to_string(),
            expected: "string",
        }),
    }
}

/// Everything the packager needs to know about one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDescriptor {
    pub product: String,
    pub version: String,
    pub description: String,
    pub vendor: String,
    pub url: String,
    pub license: String,
    pub email: String,
    pub product_user: String,
    pub product_group: String,
}

impl PackageDescriptor {
    /// Replace the catalog version for this build only.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}
