use crate::domain::a001_seller::api;
use crate::domain::a002_branch::api as branch_api;
use crate::shared::async_op::AsyncOperation;
use contracts::domain::a001_seller::{CreateSellerRequest, Seller, SellerForm, SellerType};
use contracts::domain::a002_branch::Branch;
use contracts::domain::common::FieldError;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Branch picker shows at most this many sedes.
const BRANCH_PAGE_SIZE: usize = 100;

/// ViewModel of the seller creation form.
#[derive(Clone)]
pub struct SellerDetailsVm {
    pub dni: RwSignal<String>,
    pub full_name: RwSignal<String>,
    pub seller_type: RwSignal<String>,
    pub branch_id: RwSignal<String>,
    pub branches: RwSignal<Vec<Branch>>,
    pub errors: RwSignal<Vec<FieldError>>,
    pub save: AsyncOperation<CreateSellerRequest, Seller>,
}

impl SellerDetailsVm {
    pub fn new() -> Self {
        let vm = Self {
            dni: RwSignal::new(String::new()),
            full_name: RwSignal::new(String::new()),
            seller_type: RwSignal::new(SellerType::Internal.code().to_string()),
            branch_id: RwSignal::new(String::new()),
            branches: RwSignal::new(Vec::new()),
            errors: RwSignal::new(Vec::new()),
            save: AsyncOperation::new(api::create_seller),
        };
        vm.load_branches();
        vm
    }

    fn load_branches(&self) {
        let branches = self.branches;
        let errors = self.errors;
        spawn_local(async move {
            match branch_api::fetch_branches(0, BRANCH_PAGE_SIZE).await {
                Ok(page) => branches.set(page.content.into_iter().filter(|b| b.activo).collect()),
                Err(e) => {
                    log::warn!("branches for seller form: {}", e);
                    errors.set(vec![FieldError::new("branchId", e.to_string())]);
                }
            }
        });
    }

    pub fn form(&self) -> SellerForm {
        SellerForm {
            dni: self.dni.get_untracked(),
            full_name: self.full_name.get_untracked(),
            seller_type: SellerType::from_code(&self.seller_type.get_untracked())
                .unwrap_or(SellerType::Internal),
            branch_id: self.branch_id.get_untracked().parse().ok(),
        }
    }

    pub fn error_for(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || {
            errors.with(|e| {
                contracts::domain::common::field_error::message_for(e, field).map(str::to_string)
            })
        })
    }

    /// Validate, then submit. Nothing is sent while the form has errors.
    pub fn save_command(&self, on_saved: impl FnOnce(Seller) + 'static) {
        match self.form().to_request() {
            Ok(request) => {
                self.errors.set(Vec::new());
                self.save.run(request, on_saved);
            }
            Err(errors) => self.errors.set(errors),
        }
    }
}
