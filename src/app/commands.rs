//! Command handlers shared by the CLI and the integration tests.
//!
//! Each handler builds its collaborators from the catalog, runs one
//! capability through the registry and returns report rows.

use crate::adapters::connection::{MockHttpService, NodeHttpService, XmlHttpService};
use crate::config::toml_config::{CatalogConfig, TransportKind};
use crate::core::catalog::VariantCatalog;
use crate::core::discount::{CustomerTier, DiscountChain};
use crate::core::dispatch::{animal_leg_count, animal_sound, draw_all};
use crate::core::http::Http;
use crate::domain::model::HttpMethod;
use crate::domain::ports::{Connection, Creature, Shape};
use crate::utils::error::{Result, SolidError};
use crate::utils::report::ReportRow;
use crate::utils::validation::validate_url;
use std::collections::BTreeMap;
use url::Url;

#[derive(Debug)]
pub struct App {
    config: CatalogConfig,
    animals: VariantCatalog<dyn Creature>,
    shapes: VariantCatalog<dyn Shape>,
}

impl App {
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_catalogs(config, VariantCatalog::animals(), VariantCatalog::shapes())
    }

    /// Use custom catalogs, e.g. with extra variants registered.
    pub fn with_catalogs(
        config: CatalogConfig,
        animals: VariantCatalog<dyn Creature>,
        shapes: VariantCatalog<dyn Shape>,
    ) -> Self {
        Self {
            config,
            animals,
            shapes,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn sounds(&self) -> Result<Vec<ReportRow>> {
        let registry = self.config.build_animals(&self.animals)?;
        let sounds = animal_sound(&registry)?;
        Ok(registry
            .iter()
            .zip(sounds)
            .enumerate()
            .map(|(i, (animal, sound))| ReportRow::new(i, animal.name(), sound))
            .collect())
    }

    pub fn legs(&self) -> Result<Vec<ReportRow>> {
        let registry = self.config.build_animals(&self.animals)?;
        let legs = animal_leg_count(&registry)?;
        Ok(registry
            .iter()
            .zip(legs)
            .enumerate()
            .map(|(i, (animal, legs))| ReportRow::new(i, animal.name(), legs))
            .collect())
    }

    pub fn draw(&self) -> Result<Vec<ReportRow>> {
        let registry = self.config.build_shapes(&self.shapes)?;
        Ok(draw_all(&registry)?
            .into_iter()
            .enumerate()
            .map(|(i, drawing)| ReportRow::new(i, drawing.shape.clone(), drawing.description))
            .collect())
    }

    pub fn kinds(&self) -> Vec<ReportRow> {
        let animals = self.animals.kinds().into_iter().map(|k| ("animal", k));
        let shapes = self.shapes.kinds().into_iter().map(|k| ("shape", k));
        animals
            .chain(shapes)
            .enumerate()
            .map(|(i, (family, kind))| ReportRow::new(i, family, kind))
            .collect()
    }

    pub fn discount(&self, tier: CustomerTier, price: f64) -> Result<Vec<ReportRow>> {
        let chain = DiscountChain::for_tier(tier);
        let discount = chain.discount(price)?;
        Ok(vec![ReportRow::new(0, tier.to_string(), format!("{:.2}", discount))])
    }

    pub async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        transport: Option<TransportKind>,
    ) -> Result<Vec<ReportRow>> {
        let url = self.resolve_url(url)?;
        let transport = match transport {
            Some(kind) => kind,
            None => self.config.transport()?.unwrap_or_default(),
        };

        // 組合根：唯一決定具體連線的地方
        match transport {
            TransportKind::Xml => send(Http::new(XmlHttpService::default()), method, &url).await,
            TransportKind::Node => send(Http::new(NodeHttpService::default()), method, &url).await,
            TransportKind::Mock => send(Http::new(MockHttpService::default()), method, &url).await,
        }
    }

    fn resolve_url(&self, url: &str) -> Result<String> {
        // 絕對網址直接使用 (scheme 不分大小寫)，只有相對路徑才接到 base_url 上
        match Url::parse(url) {
            Ok(_) => return Ok(validate_url("url", url)?.to_string()),
            Err(url::ParseError::RelativeUrlWithoutBase) => {}
            Err(e) => return Err(SolidError::validation("url", url, e.to_string())),
        }
        let base_url = self.config.base_url().ok_or_else(|| SolidError::Config {
            message: format!("'{}' is relative but no [http] base_url is configured", url),
        })?;
        let base = validate_url("http.base_url", base_url)?;
        let joined = base
            .join(url)
            .map_err(|e| SolidError::validation("url", url, e.to_string()))?;
        Ok(joined.to_string())
    }
}

async fn send<C: Connection>(
    http: Http<C>,
    method: HttpMethod,
    url: &str,
) -> Result<Vec<ReportRow>> {
    let response = http.send(method, url, BTreeMap::new()).await?;
    Ok(vec![ReportRow::new(
        0,
        format!("{} {}", method, url),
        format!("{} {}", response.status, response.body),
    )])
}
