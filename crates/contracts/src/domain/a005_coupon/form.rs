//! Coupon creation/edit form: raw text inputs, validation and normalisation
//! into the request body.

use super::aggregate::{CrearCuponRequest, CuponResponse, DiscountType};
use crate::domain::common::FieldError;
use chrono::NaiveDate;

pub const FIELD_CODIGO: &str = "codigo";
pub const FIELD_VALOR: &str = "valor";
pub const FIELD_FECHA_EXPIRACION: &str = "fechaExpiracion";
pub const FIELD_MONTO_MINIMO: &str = "montoMinimoRequerido";
pub const FIELD_USOS_MAXIMOS: &str = "usosMaximos";

/// Form state as typed by the user. Numeric fields stay as text until
/// submission so a half-typed value never gets rewritten under the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct CouponForm {
    /// `Some(id)` when editing an existing coupon.
    pub id: Option<i64>,
    pub codigo: String,
    pub tipo_descuento: DiscountType,
    pub valor: String,
    pub fecha_expiracion: String,
    pub usos_maximos: String,
    pub monto_minimo_requerido: String,
}

impl Default for CouponForm {
    fn default() -> Self {
        Self {
            id: None,
            codigo: String::new(),
            tipo_descuento: DiscountType::Porcentaje,
            valor: String::new(),
            fecha_expiracion: String::new(),
            usos_maximos: String::new(),
            monto_minimo_requerido: "0".to_string(),
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Blank or zero means unlimited. Fractions are truncated.
fn parse_max_uses(raw: &str) -> Result<Option<u32>, ()> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let value = parse_number(raw).ok_or(())?.trunc();
    if value == 0.0 {
        Ok(None)
    } else if value >= 1.0 && value <= u32::MAX as f64 {
        Ok(Some(value as u32))
    } else {
        Err(())
    }
}

impl CouponForm {
    pub fn from_response(c: &CuponResponse) -> Self {
        Self {
            id: Some(c.id),
            codigo: c.codigo.clone(),
            tipo_descuento: c.tipo_descuento,
            valor: c.valor.to_string(),
            fecha_expiracion: c.fecha_expiracion.format("%Y-%m-%d").to_string(),
            usos_maximos: c.usos_maximos.map(|u| u.to_string()).unwrap_or_default(),
            monto_minimo_requerido: c.monto_minimo_requerido.to_string(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// All failing rules, in rule order. The first entry is the summary shown
    /// above the form. `today` is compared by calendar day only.
    pub fn validate(&self, today: NaiveDate) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.codigo.trim().is_empty() {
            errors.push(FieldError::new(FIELD_CODIGO, "El código del cupón es obligatorio"));
        }

        match parse_number(&self.valor) {
            Some(v) if v > 0.0 => {
                if self.tipo_descuento == DiscountType::Porcentaje && v > 100.0 {
                    errors.push(FieldError::new(
                        FIELD_VALOR,
                        "El porcentaje de descuento no puede ser mayor a 100",
                    ));
                }
            }
            _ => errors.push(FieldError::new(FIELD_VALOR, "El valor debe ser mayor a 0")),
        }

        match NaiveDate::parse_from_str(self.fecha_expiracion.trim(), "%Y-%m-%d") {
            Ok(date) if date >= today => {}
            Ok(_) => errors.push(FieldError::new(
                FIELD_FECHA_EXPIRACION,
                "La fecha de expiración no puede ser anterior a hoy",
            )),
            Err(_) => errors.push(FieldError::new(
                FIELD_FECHA_EXPIRACION,
                "Ingrese una fecha de expiración",
            )),
        }

        let monto_ok = if self.monto_minimo_requerido.trim().is_empty() {
            true
        } else {
            matches!(parse_number(&self.monto_minimo_requerido), Some(v) if v >= 0.0)
        };
        if !monto_ok {
            errors.push(FieldError::new(
                FIELD_MONTO_MINIMO,
                "El monto mínimo de compra no puede ser negativo",
            ));
        }

        if parse_max_uses(&self.usos_maximos).is_err() {
            errors.push(FieldError::new(
                FIELD_USOS_MAXIMOS,
                "Los usos máximos deben ser un número entero mayor o igual a 1",
            ));
        }

        errors
    }

    /// Validates and builds the request body with numbers re-normalised
    /// (parsed, then re-serialised by serde).
    pub fn to_request(&self, today: NaiveDate) -> Result<CrearCuponRequest, Vec<FieldError>> {
        let errors = self.validate(today);
        if !errors.is_empty() {
            return Err(errors);
        }

        let invalid = |field: &str| vec![FieldError::new(field, "Valor inválido")];

        Ok(CrearCuponRequest {
            codigo: self.codigo.trim().to_string(),
            tipo_descuento: self.tipo_descuento,
            valor: parse_number(&self.valor).ok_or_else(|| invalid(FIELD_VALOR))?,
            fecha_expiracion: NaiveDate::parse_from_str(self.fecha_expiracion.trim(), "%Y-%m-%d")
                .map_err(|_| invalid(FIELD_FECHA_EXPIRACION))?,
            usos_maximos: parse_max_uses(&self.usos_maximos)
                .map_err(|_| invalid(FIELD_USOS_MAXIMOS))?,
            monto_minimo_requerido: parse_number(&self.monto_minimo_requerido).unwrap_or(0.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn valid_form() -> CouponForm {
        CouponForm {
            codigo: "VERANO25".into(),
            valor: "25".into(),
            fecha_expiracion: "2025-03-31".into(),
            ..CouponForm::default()
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(valid_form().validate(today()).is_empty());
    }

    #[test]
    fn test_blank_code() {
        let form = CouponForm {
            codigo: "   ".into(),
            ..valid_form()
        };
        assert_eq!(fields(&form.validate(today())), vec![FIELD_CODIGO]);
    }

    #[test]
    fn test_value_must_be_positive() {
        for raw in ["0", "-5", "", "abc"] {
            let form = CouponForm {
                valor: raw.into(),
                ..valid_form()
            };
            assert_eq!(fields(&form.validate(today())), vec![FIELD_VALOR], "valor={raw}");
        }
    }

    #[test]
    fn test_percentage_over_hundred_blocks_submission() {
        let form = CouponForm {
            valor: "100.5".into(),
            ..valid_form()
        };
        let errors = form.validate(today());
        assert!(!errors.is_empty());
        assert!(form.to_request(today()).is_err());

        let fixed = CouponForm {
            tipo_descuento: DiscountType::MontoFijo,
            valor: "150".into(),
            ..valid_form()
        };
        assert!(fixed.validate(today()).is_empty());
    }

    #[test]
    fn test_expiration_compares_calendar_days() {
        let same_day = CouponForm {
            fecha_expiracion: "2025-03-10".into(),
            ..valid_form()
        };
        assert!(same_day.validate(today()).is_empty());

        let yesterday = CouponForm {
            fecha_expiracion: "2025-03-09".into(),
            ..valid_form()
        };
        assert_eq!(fields(&yesterday.validate(today())), vec![FIELD_FECHA_EXPIRACION]);

        let missing = CouponForm {
            fecha_expiracion: "".into(),
            ..valid_form()
        };
        assert_eq!(fields(&missing.validate(today())), vec![FIELD_FECHA_EXPIRACION]);
    }

    #[test]
    fn test_negative_minimum_purchase() {
        let form = CouponForm {
            monto_minimo_requerido: "-1".into(),
            ..valid_form()
        };
        assert_eq!(fields(&form.validate(today())), vec![FIELD_MONTO_MINIMO]);
    }

    #[test]
    fn test_errors_follow_rule_order() {
        let form = CouponForm {
            codigo: "".into(),
            valor: "0".into(),
            fecha_expiracion: "2020-01-01".into(),
            monto_minimo_requerido: "-3".into(),
            usos_maximos: "-2".into(),
            ..CouponForm::default()
        };
        let errors = form.validate(today());
        assert_eq!(
            fields(&errors),
            vec![
                FIELD_CODIGO,
                FIELD_VALOR,
                FIELD_FECHA_EXPIRACION,
                FIELD_MONTO_MINIMO,
                FIELD_USOS_MAXIMOS
            ]
        );
        assert_eq!(
            crate::domain::common::field_error::summary(&errors),
            Some("El código del cupón es obligatorio")
        );
    }

    #[test]
    fn test_zero_or_blank_max_uses_means_unlimited() {
        for raw in ["0", "", "  "] {
            let form = CouponForm {
                usos_maximos: raw.into(),
                ..valid_form()
            };
            let req = form.to_request(today()).unwrap();
            assert_eq!(req.usos_maximos, None, "usosMaximos={raw:?}");
            let json = serde_json::to_value(&req).unwrap();
            assert!(json["usosMaximos"].is_null());
        }
    }

    #[test]
    fn test_max_uses_coerced_to_integer() {
        let form = CouponForm {
            usos_maximos: "12.8".into(),
            ..valid_form()
        };
        assert_eq!(form.to_request(today()).unwrap().usos_maximos, Some(12));
    }

    #[test]
    fn test_request_normalises_numbers() {
        let form = CouponForm {
            codigo: "  PROMO10 ".into(),
            tipo_descuento: DiscountType::MontoFijo,
            valor: " 10,50 ".into(),
            monto_minimo_requerido: "".into(),
            usos_maximos: "100".into(),
            ..valid_form()
        };
        let req = form.to_request(today()).unwrap();
        assert_eq!(req.codigo, "PROMO10");
        assert_eq!(req.valor, 10.5);
        assert_eq!(req.monto_minimo_requerido, 0.0);
        assert_eq!(req.usos_maximos, Some(100));
    }

    #[test]
    fn test_round_trip_from_response_keeps_edit_mode() {
        let resp = CuponResponse {
            id: 9,
            codigo: "FIJO10".into(),
            tipo_descuento: DiscountType::MontoFijo,
            valor: 10.0,
            fecha_expiracion: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            usos_maximos: None,
            usos_actuales: 4,
            monto_minimo_requerido: 100.0,
            estado: super::super::aggregate::CouponStatus::Activo,
        };
        let form = CouponForm::from_response(&resp);
        assert!(form.is_edit_mode());
        assert_eq!(form.usos_maximos, "");
        assert_eq!(form.fecha_expiracion, "2025-06-30");
    }
}
