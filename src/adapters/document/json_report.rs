//! JSON report adapter.
//!
//! Wraps the quote in an envelope carrying the title, currency and
//! catalog labels so consumers do not need the catalog to read it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::catalog::Catalog;
use crate::domain::engine::Quote;
use crate::ports::{ReportError, ReportGenerator, ReportOptions};

/// JSON implementation of [`ReportGenerator`].
#[derive(Debug, Clone, Default)]
pub struct JsonReportGenerator;

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct ReportEnvelope<'a> {
    title: &'a str,
    currency: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    intent: Option<&'a str>,
    labels: Labels<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    engagement_total: Option<f64>,
    quote: QuoteBody<'a>,
}

#[derive(Serialize)]
struct Labels<'a> {
    capacity_tier: &'a str,
    allocation: &'a str,
    payment: &'a str,
}

/// Either the full quote or only its headline figures.
#[derive(Serialize)]
#[serde(untagged)]
enum QuoteBody<'a> {
    Full(&'a Quote),
    Summary(Headline),
}

#[derive(Serialize)]
struct Headline {
    effective_work: f64,
    completion_weeks: u32,
    final_price: f64,
    effective_unit_price: f64,
    volume_discount_percentage: f64,
    allocation_description: String,
}

impl Headline {
    fn from_quote(quote: &Quote) -> Self {
        Self {
            effective_work: quote.effective_work,
            completion_weeks: quote.completion_weeks,
            final_price: quote.final_price,
            effective_unit_price: quote.effective_unit_price,
            volume_discount_percentage: quote.volume_discount_percentage,
            allocation_description: quote.allocation_description.clone(),
        }
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate(
        &self,
        quote: &Quote,
        catalog: &Catalog,
        options: &ReportOptions,
    ) -> Result<String, ReportError> {
        if options.title.trim().is_empty() {
            return Err(ReportError::missing_data("title"));
        }

        let config = &quote.configuration;
        let intent = config
            .preset
            .as_ref()
            .and_then(|id| catalog.preset(id))
            .map(|preset| preset.intent.as_str());

        let generated_at = if options.include_metadata {
            Some(options.generated_at.unwrap_or_else(Utc::now))
        } else {
            None
        };

        let body = if options.include_breakdown {
            QuoteBody::Full(quote)
        } else {
            QuoteBody::Summary(Headline::from_quote(quote))
        };

        let envelope = ReportEnvelope {
            title: &options.title,
            currency: &options.currency,
            generated_at,
            intent,
            labels: Labels {
                capacity_tier: &catalog.capacity(config.capacity_tier).label,
                allocation: &catalog.allocation(config.allocation).label,
                payment: &catalog.payment(config.payment).label,
            },
            engagement_total: quote.engagement_total(),
            quote: body,
        };

        Ok(serde_json::to_string_pretty(&envelope)?)
    }

    fn media_type(&self) -> &'static str {
        "application/json"
    }
}
