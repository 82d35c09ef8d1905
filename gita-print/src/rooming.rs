//! Rooming list renderer
//!
//! Renders a trip's [`Allocation`] into the printable HTML rooming list
//! handed to the hotel: one table, group cells merged across each
//! group's rooms, totals and generation timestamp in the footer.

use chrono_tz::Tz;
use gita_alloc::{Allocation, Unit};
use shared::models::Trip;

use crate::html::HtmlBuilder;

/// Everything one rooming list needs, resolved by the caller
pub struct RoomingListContext<'a> {
    pub trip: &'a Trip,
    pub allocation: &'a Allocation,
    /// Unix millis, supplied by the caller so a reprint reproduces the
    /// original document byte for byte.
    pub generated_at: i64,
}

/// Rooming list renderer
///
/// Stateless apart from the timezone used for the footer timestamp.
pub struct RoomingListRenderer {
    timezone: Tz,
}

impl RoomingListRenderer {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Renderer configured for the agency's own timezone.
    pub fn rome() -> Self {
        Self::new(chrono_tz::Europe::Rome)
    }

    /// Render a rooming list to a self-contained HTML document.
    pub fn render(&self, ctx: &RoomingListContext) -> String {
        let mut b = HtmlBuilder::document(&ctx.trip.title);

        self.render_header(&mut b, ctx.trip);

        if ctx.allocation.is_empty() {
            b.elem("p", "Nessun partecipante.");
        } else {
            self.render_table(&mut b, ctx.allocation);
        }

        self.render_footer(&mut b, ctx);

        tracing::debug!(
            trip = %ctx.trip.id,
            units = ctx.allocation.unit_count(),
            "rooming list rendered"
        );
        b.build()
    }

    /// Render the header section
    fn render_header(&self, b: &mut HtmlBuilder, trip: &Trip) {
        b.elem("h1", &trip.title);

        let mut line = format!(
            "{} · dal {} al {}",
            trip.destination,
            trip.start_date.format("%d/%m/%Y"),
            trip.end_date.format("%d/%m/%Y"),
        );
        match trip.nights() {
            0 => {}
            1 => line.push_str(" · 1 notte"),
            n => line.push_str(&format!(" · {n} notti")),
        }
        b.elem("p", &line);

        if let Some(hotel) = &trip.hotel {
            b.elem("p", &format!("Hotel: {hotel}"));
        }
    }

    /// Render the allocation table
    fn render_table(&self, b: &mut HtmlBuilder, allocation: &Allocation) {
        b.open("table");

        b.open("thead").open("tr");
        for heading in ["Gruppo", "Camera", "Tipo", "Occupanti"] {
            b.elem("th", heading);
        }
        b.close().close();

        b.open("tbody");
        for (group_number, units) in &allocation.groups {
            self.render_block(b, &format!("Gruppo {group_number}"), units);
        }
        if !allocation.ungrouped.is_empty() {
            self.render_block(b, "—", &allocation.ungrouped);
        }
        b.close();

        b.close();
    }

    /// One block of rows sharing a merged group-label cell.
    fn render_block(&self, b: &mut HtmlBuilder, label: &str, units: &[Unit]) {
        let rowspan = units.len().to_string();
        for (i, unit) in units.iter().enumerate() {
            b.open("tr");
            if i == 0 {
                b.elem_with("td", &[("rowspan", rowspan.as_str())], label);
            }
            b.elem("td", &unit.index.to_string());
            b.elem("td", unit.category.label());
            b.elem("td", &occupant_names(unit));
            b.close();
        }
    }

    /// Render the footer section
    fn render_footer(&self, b: &mut HtmlBuilder, ctx: &RoomingListContext) {
        let line = format!(
            "{}, {} - stampato il {}",
            count_label(ctx.allocation.occupant_count(), "partecipante", "partecipanti"),
            count_label(ctx.allocation.unit_count(), "camera", "camere"),
            format_timestamp(ctx.generated_at, self.timezone),
        );
        b.elem_with("p", &[("class", "footer")], &line);
    }
}

impl Default for RoomingListRenderer {
    fn default() -> Self {
        Self::rome()
    }
}

fn occupant_names(unit: &Unit) -> String {
    unit.occupants
        .iter()
        .map(|o| o.full_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn count_label(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("1 {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// Format unix timestamp (millis) as DD/MM/YYYY HH:mm in the given timezone
fn format_timestamp(ts: i64, tz: Tz) -> String {
    if let Some(dt) = chrono::DateTime::from_timestamp_millis(ts) {
        dt.with_timezone(&tz).format("%d/%m/%Y %H:%M").to_string()
    } else {
        "data non disponibile".to_string()
    }
}
