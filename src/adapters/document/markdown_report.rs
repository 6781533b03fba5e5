//! Markdown report adapter.
//!
//! Renders a quote as a proposal document with a fixed section layout:
//! header, summary, modules, capacity, pricing, allocation, footer.

use chrono::Utc;

use crate::domain::catalog::{Catalog, CatalogKey, CostKind};
use crate::domain::engine::Quote;
use crate::ports::{ReportError, ReportGenerator, ReportOptions};

/// Markdown implementation of [`ReportGenerator`].
#[derive(Debug, Clone, Default)]
pub struct MarkdownReportGenerator;

impl MarkdownReportGenerator {
    /// Creates a new markdown report generator.
    pub fn new() -> Self {
        Self
    }

    fn generate_header(&self, quote: &Quote, catalog: &Catalog, options: &ReportOptions) -> String {
        let mut header = format!("# {}\n\n", options.title);

        let intent = quote
            .configuration
            .preset
            .as_ref()
            .and_then(|id| catalog.preset(id))
            .map(|preset| preset.intent.as_str());
        if let Some(intent) = intent {
            header.push_str(&format!("> **Intent:** {}\n", intent));
        }

        if options.include_metadata {
            let generated_at = options.generated_at.unwrap_or_else(Utc::now);
            header.push_str(&format!(
                "> **Status:** {:?} | **Generated:** {}\n",
                quote.configuration.status,
                generated_at.format("%Y-%m-%d %H:%M UTC")
            ));
        }

        header.push('\n');
        header
    }

    fn generate_summary(&self, quote: &Quote, options: &ReportOptions) -> String {
        let currency = &options.currency;
        let mut section = String::from("## Summary\n\n");
        section.push_str("| | |\n|---|---|\n");
        section.push_str(&format!(
            "| Weekly price | {} {} |\n",
            currency,
            format_amount(quote.final_price)
        ));
        section.push_str(&format!("| Completion | {} |\n", weeks_label(quote.completion_weeks)));
        if let Some(total) = quote.engagement_total() {
            section.push_str(&format!(
                "| Engagement total | {} {} |\n",
                currency,
                format_amount(total)
            ));
        }
        section.push_str(&format!(
            "| Effective unit price | {} {:.2} per EVC |\n",
            currency, quote.effective_unit_price
        ));
        section.push_str(&format!(
            "| Volume discount | {:.1}% |\n",
            quote.volume_discount_percentage
        ));
        section.push('\n');
        section
    }

    fn generate_modules(&self, quote: &Quote, catalog: &Catalog) -> String {
        let mut section = String::from("## Modules\n\n");

        if quote.modules.is_empty() {
            section.push_str("*No modules selected*\n\n");
            return section;
        }

        section.push_str("| Module | Pillar | Engagement | EVC |\n");
        section.push_str("|--------|--------|------------|-----|\n");
        for line in &quote.modules {
            // Single-variant modules have no choice to default.
            let single = catalog
                .module(&line.module)
                .map_or(false, |module| module.is_single_variant());
            let marker = if line.defaulted && !single { " (default)" } else { "" };
            section.push_str(&format!(
                "| {} | {} | {}{} | {} |\n",
                line.name,
                line.pillar,
                line.engagement,
                marker,
                format_units(line.work_units)
            ));
        }
        section.push('\n');

        section.push_str(&format!("**Base work:** {} EVC\n", format_units(quote.base_work)));
        if !quote.switching_overhead.is_zero() {
            section.push_str(&format!(
                "**Switching overhead:** {}\n",
                quote.switching_overhead
            ));
        }
        section.push_str(&format!(
            "**Effective work:** {} EVC\n\n",
            format_units(quote.effective_work)
        ));
        section
    }

    fn generate_capacity(&self, quote: &Quote, catalog: &Catalog) -> String {
        let tier = catalog.capacity(quote.configuration.capacity_tier);
        let mut section = String::from("## Capacity\n\n");
        section.push_str(&format!(
            "**Tier:** {} ({}) - {} EVC per week\n\n",
            tier.label,
            quote.configuration.capacity_tier.key(),
            format_units(quote.base_capacity)
        ));

        if !quote.add_ons.is_empty() {
            section.push_str("| Add-on | Rule | EVC per week |\n");
            section.push_str("|--------|------|--------------|\n");
            for add_on in &quote.add_ons {
                let rule = match add_on.kind {
                    CostKind::Absolute => format!("flat {}", format_units(add_on.rule_value)),
                    CostKind::Relative => format!("{}% of capacity", format_units(add_on.rule_value)),
                };
                section.push_str(&format!(
                    "| {} | {} | {} |\n",
                    add_on.label,
                    rule,
                    format_units(add_on.work_units)
                ));
            }
            section.push('\n');
        }

        section.push_str(&format!(
            "**Pricing capacity:** {} EVC per week\n\n",
            format_units(quote.pricing_capacity)
        ));
        section
    }

    fn generate_pricing(&self, quote: &Quote, catalog: &Catalog, options: &ReportOptions) -> String {
        let currency = &options.currency;
        let mut section = String::from("## Pricing\n\n");
        section.push_str(&format!(
            "Base price: {} {:.2} per EVC\n\n",
            currency, quote.base_unit_price
        ));

        if !quote.bands.is_empty() {
            section.push_str("| Band (EVC) | Units | Discount | Charge |\n");
            section.push_str("|------------|-------|----------|--------|\n");
            for band in &quote.bands {
                let range = match band.upper {
                    Some(upper) => format!("{}-{}", format_units(band.lower), format_units(upper)),
                    None => format!("{}+", format_units(band.lower)),
                };
                section.push_str(&format!(
                    "| {} | {} | {:.0}% | {} {:.2} |\n",
                    range,
                    format_units(band.units),
                    band.discount * 100.0,
                    currency,
                    band.charge
                ));
            }
            section.push('\n');
        }

        let payment = catalog.payment(quote.configuration.payment);
        section.push_str(&format!(
            "**Payment:** {} (x{})\n\n",
            payment.label, quote.payment_multiplier
        ));
        section
    }

    fn generate_allocation(&self, quote: &Quote) -> String {
        format!("## Allocation\n\n{}\n\n", quote.allocation_description)
    }

    fn generate_footer(&self) -> String {
        String::from("---\n\n*Generated by Solution Configurator*\n")
    }
}

impl ReportGenerator for MarkdownReportGenerator {
    fn generate(
        &self,
        quote: &Quote,
        catalog: &Catalog,
        options: &ReportOptions,
    ) -> Result<String, ReportError> {
        if options.title.trim().is_empty() {
            return Err(ReportError::missing_data("title"));
        }

        let mut doc = self.generate_header(quote, catalog, options);
        doc.push_str(&self.generate_summary(quote, options));

        if options.include_breakdown {
            doc.push_str(&self.generate_modules(quote, catalog));
            doc.push_str(&self.generate_capacity(quote, catalog));
            doc.push_str(&self.generate_pricing(quote, catalog, options));
            doc.push_str(&self.generate_allocation(quote));
        }

        doc.push_str(&self.generate_footer());
        Ok(doc)
    }

    fn media_type(&self) -> &'static str {
        "text/markdown"
    }
}

/// Whole currency amount with thousands separators.
fn format_amount(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0 {
        out.insert(0, '-');
    }
    out
}

/// Work units without a trailing `.0` when whole.
fn format_units(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn weeks_label(weeks: u32) -> String {
    match weeks {
        0 => "Nothing to deliver".to_string(),
        1 => "1 week".to_string(),
        n => format!("{} weeks", n),
    }
}
