use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    Porcentaje,
    MontoFijo,
}

impl DiscountType {
    pub const ALL: [DiscountType; 2] = [DiscountType::Porcentaje, DiscountType::MontoFijo];

    pub fn label(&self) -> &'static str {
        match self {
            DiscountType::Porcentaje => "Porcentaje",
            DiscountType::MontoFijo => "Monto fijo",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DiscountType::Porcentaje => "PORCENTAJE",
            DiscountType::MontoFijo => "MONTO_FIJO",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

/// Computed by the backend from expiry date and usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponStatus {
    Activo,
    Expirado,
    Agotado,
}

impl CouponStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CouponStatus::Activo => "Activo",
            CouponStatus::Expirado => "Expirado",
            CouponStatus::Agotado => "Agotado",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            CouponStatus::Activo => "ACTIVO",
            CouponStatus::Expirado => "EXPIRADO",
            CouponStatus::Agotado => "AGOTADO",
        }
    }
}

/// Body of `POST /admin/cupones` and `PUT /admin/cupones/{id}`.
///
/// `usos_maximos` is serialized as `null` when unlimited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrearCuponRequest {
    pub codigo: String,
    pub tipo_descuento: DiscountType,
    pub valor: f64,
    pub fecha_expiracion: NaiveDate,
    pub usos_maximos: Option<u32>,
    pub monto_minimo_requerido: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuponResponse {
    pub id: i64,
    pub codigo: String,
    pub tipo_descuento: DiscountType,
    pub valor: f64,
    pub fecha_expiracion: NaiveDate,
    #[serde(default)]
    pub usos_maximos: Option<u32>,
    #[serde(default)]
    pub usos_actuales: u32,
    #[serde(default)]
    pub monto_minimo_requerido: f64,
    pub estado: CouponStatus,
}

impl CuponResponse {
    pub fn value_label(&self) -> String {
        match self.tipo_descuento {
            DiscountType::Porcentaje => format!("{}%", self.valor),
            DiscountType::MontoFijo => crate::domain::common::money::format_soles(self.valor),
        }
    }

    pub fn usage_label(&self) -> String {
        match self.usos_maximos {
            Some(max) => format!("{} / {}", self.usos_actuales, max),
            None => format!("{} / ∞", self.usos_actuales),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_null_for_unlimited() {
        let req = CrearCuponRequest {
            codigo: "VERANO25".into(),
            tipo_descuento: DiscountType::Porcentaje,
            valor: 25.0,
            fecha_expiracion: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            usos_maximos: None,
            monto_minimo_requerido: 0.0,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["tipoDescuento"], "PORCENTAJE");
        assert_eq!(json["fechaExpiracion"], "2025-12-31");
        assert!(json["usosMaximos"].is_null());
        assert_eq!(json["montoMinimoRequerido"], 0.0);
    }

    #[test]
    fn test_response_labels() {
        let json = r#"{
            "id": 3, "codigo": "FIJO10", "tipoDescuento": "MONTO_FIJO", "valor": 10,
            "fechaExpiracion": "2025-06-30", "usosMaximos": 50, "usosActuales": 50,
            "montoMinimoRequerido": 100, "estado": "AGOTADO"
        }"#;
        let c: CuponResponse = serde_json::from_str(json).unwrap();
        assert_eq!(c.estado, CouponStatus::Agotado);
        assert_eq!(c.value_label(), "S/ 10.00");
        assert_eq!(c.usage_label(), "50 / 50");
    }
}
