use crate::domain::common::round_currency;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalesChannel {
    FisicoPresencial,
    RemotoLlamada,
    Otro,
}

impl SalesChannel {
    pub fn label(&self) -> &'static str {
        match self {
            SalesChannel::FisicoPresencial => "Físico / Presencial",
            SalesChannel::RemotoLlamada => "Remoto / Llamada",
            SalesChannel::Otro => "Otro",
        }
    }
}

/// Row of `GET /venta/analisis/ventas-por-canal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesByChannelRow {
    pub canal: SalesChannel,
    pub cantidad_ventas: u64,
    pub ingresos_totales: f64,
}

/// Totals row and per-channel revenue share for the analytics table.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSummary {
    pub rows: Vec<ChannelShare>,
    pub total_ventas: u64,
    pub total_ingresos: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelShare {
    pub row: SalesByChannelRow,
    /// Share of total revenue, 0–100, two decimals.
    pub porcentaje_ingresos: f64,
}

impl ChannelSummary {
    pub fn from_rows(mut rows: Vec<SalesByChannelRow>) -> Self {
        rows.sort_by(|a, b| b.ingresos_totales.total_cmp(&a.ingresos_totales));

        let total_ventas = rows.iter().map(|r| r.cantidad_ventas).sum();
        let total_ingresos = round_currency(rows.iter().map(|r| r.ingresos_totales).sum());

        let rows = rows
            .into_iter()
            .map(|row| {
                let porcentaje_ingresos = if total_ingresos > 0.0 {
                    round_currency(row.ingresos_totales / total_ingresos * 100.0)
                } else {
                    0.0
                };
                ChannelShare {
                    row,
                    porcentaje_ingresos,
                }
            })
            .collect();

        Self {
            rows,
            total_ventas,
            total_ingresos,
        }
    }
}
