use crate::domain::a005_coupon::api;
use crate::shared::async_op::AsyncOperation;
use crate::shared::date_utils::today_local;
use contracts::domain::a005_coupon::{CouponForm, CrearCuponRequest, CuponResponse, DiscountType};
use contracts::domain::common::field_error::message_for;
use contracts::domain::common::FieldError;
use leptos::prelude::*;

/// ViewModel of the coupon form. Inputs are kept as typed text and only
/// parsed on submit.
#[derive(Clone)]
pub struct CouponDetailsVm {
    pub id: Option<i64>,
    pub codigo: RwSignal<String>,
    pub tipo_descuento: RwSignal<String>,
    pub valor: RwSignal<String>,
    pub fecha_expiracion: RwSignal<String>,
    pub usos_maximos: RwSignal<String>,
    pub monto_minimo: RwSignal<String>,
    pub errors: RwSignal<Vec<FieldError>>,
    pub save: AsyncOperation<(Option<i64>, CrearCuponRequest), CuponResponse>,
}

impl CouponDetailsVm {
    pub fn new(existing: Option<&CuponResponse>) -> Self {
        let form = existing.map(CouponForm::from_response).unwrap_or_default();
        Self {
            id: form.id,
            codigo: RwSignal::new(form.codigo),
            tipo_descuento: RwSignal::new(form.tipo_descuento.code().to_string()),
            valor: RwSignal::new(form.valor),
            fecha_expiracion: RwSignal::new(form.fecha_expiracion),
            usos_maximos: RwSignal::new(form.usos_maximos),
            monto_minimo: RwSignal::new(form.monto_minimo_requerido),
            errors: RwSignal::new(Vec::new()),
            save: AsyncOperation::new(api::save_coupon),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn form(&self) -> CouponForm {
        CouponForm {
            id: self.id,
            codigo: self.codigo.get_untracked(),
            tipo_descuento: DiscountType::from_code(&self.tipo_descuento.get_untracked())
                .unwrap_or(DiscountType::Porcentaje),
            valor: self.valor.get_untracked(),
            fecha_expiracion: self.fecha_expiracion.get_untracked(),
            usos_maximos: self.usos_maximos.get_untracked(),
            monto_minimo_requerido: self.monto_minimo.get_untracked(),
        }
    }

    pub fn error_for(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| message_for(e, field).map(str::to_string)))
    }

    /// Client-side validation runs first; the request is only sent when the
    /// form is clean.
    pub fn save_command(&self, on_saved: impl FnOnce(CuponResponse) + 'static) {
        let form = self.form();
        match form.to_request(today_local()) {
            Ok(request) => {
                self.errors.set(Vec::new());
                self.save.run((form.id, request), on_saved);
            }
            Err(errors) => {
                log::debug!("coupon form rejected: {} errors", errors.len());
                self.errors.set(errors);
            }
        }
    }
}
