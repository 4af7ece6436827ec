use crate::core::catalog::{VariantCatalog, VariantSpec};
use crate::core::dispatch::CapabilityRegistry;
use crate::domain::ports::{Creature, Shape};
use crate::utils::error::{Result, SolidError};
use crate::utils::validation::{validate_non_empty_string, validate_unique, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub catalog: CatalogMeta,
    #[serde(default)]
    pub animals: Vec<AnimalEntry>,
    #[serde(default)]
    pub shapes: Vec<ShapeEntry>,
    pub http: Option<HttpConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogMeta {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalEntry {
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeEntry {
    pub kind: String,
    #[serde(default)]
    pub size: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub base_url: String,
    pub transport: Option<String>,
}

/// Which concrete connection backs `Http` when a request names none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportKind {
    #[default]
    Xml,
    Node,
    Mock,
}

impl FromStr for TransportKind {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "xml" => Ok(Self::Xml),
            "node" => Ok(Self::Node),
            "mock" => Ok(Self::Mock),
            other => Err(SolidError::validation(
                "http.transport",
                other,
                "Valid transports: xml, node, mock",
            )),
        }
    }
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

impl CatalogConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${ZOO_NAME})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures<'_>| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// The built-in zoo used when no catalog file is given.
    pub fn default_zoo() -> Self {
        Self {
            catalog: CatalogMeta {
                name: "default-zoo".to_string(),
                description: Some("Lion, mouse and snake".to_string()),
            },
            animals: ["lion", "mouse", "snake"]
                .into_iter()
                .map(|kind| AnimalEntry {
                    kind: kind.to_string(),
                    name: kind.to_string(),
                })
                .collect(),
            shapes: vec![
                ShapeEntry {
                    kind: "circle".to_string(),
                    size: vec![1.0],
                },
                ShapeEntry {
                    kind: "square".to_string(),
                    size: vec![2.0],
                },
                ShapeEntry {
                    kind: "rectangle".to_string(),
                    size: vec![2.0, 3.0],
                },
            ],
            http: None,
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("catalog.name", &self.catalog.name)?;

        for (i, entry) in self.animals.iter().enumerate() {
            validate_non_empty_string(&format!("animals[{}].kind", i), &entry.kind)?;
            validate_non_empty_string(&format!("animals[{}].name", i), &entry.name)?;
        }
        // 名稱用來識別動物，同一份目錄裡不可重複
        validate_unique("animals.name", self.animals.iter().map(|a| a.name.trim()))?;

        for (i, entry) in self.shapes.iter().enumerate() {
            validate_non_empty_string(&format!("shapes[{}].kind", i), &entry.kind)?;
        }

        if let Some(http) = &self.http {
            validate_url("http.base_url", &http.base_url)?;
        }
        self.transport()?;

        Ok(())
    }

    pub fn build_animals(
        &self,
        catalog: &VariantCatalog<dyn Creature>,
    ) -> Result<CapabilityRegistry<dyn Creature>> {
        self.animals
            .iter()
            .map(|entry| catalog.build(&entry.kind, &VariantSpec::named(entry.name.clone())))
            .collect()
    }

    pub fn build_shapes(
        &self,
        catalog: &VariantCatalog<dyn Shape>,
    ) -> Result<CapabilityRegistry<dyn Shape>> {
        self.shapes
            .iter()
            .map(|entry| {
                let spec = VariantSpec {
                    name: entry.kind.clone(),
                    dimensions: entry.size.clone(),
                };
                catalog.build(&entry.kind, &spec)
            })
            .collect()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.http.as_ref().map(|h| h.base_url.as_str())
    }

    /// The configured transport, `None` when the catalog leaves it to the default.
    pub fn transport(&self) -> Result<Option<TransportKind>> {
        self.http
            .as_ref()
            .and_then(|h| h.transport.as_deref())
            .map(TransportKind::from_str)
            .transpose()
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::default_zoo()
    }
}

impl TryFrom<&Path> for CatalogConfig {
    type Error = SolidError;

    fn try_from(path: &Path) -> Result<Self> {
        let config = Self::from_file(path)?;
        config.validate()?;
        Ok(config)
    }
}
