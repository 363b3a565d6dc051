use crate::domain::common::FieldError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SellerType {
    Internal,
    External,
}

impl SellerType {
    pub const ALL: [SellerType; 2] = [SellerType::Internal, SellerType::External];

    pub fn label(&self) -> &'static str {
        match self {
            SellerType::Internal => "Interno",
            SellerType::External => "Externo",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SellerType::Internal => "INTERNAL",
            SellerType::External => "EXTERNAL",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SellerStatus {
    Active,
    Inactive,
}

impl SellerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SellerStatus::Active => "Activo",
            SellerStatus::Inactive => "Inactivo",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SellerStatus::Active => "ACTIVE",
            SellerStatus::Inactive => "INACTIVE",
        }
    }
}

/// Vendedor as returned by `GET /vendedores`. The client never changes
/// `seller_status`; it is owned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub seller_id: i64,
    pub dni: String,
    pub full_name: String,
    pub seller_type: SellerType,
    #[serde(default)]
    pub seller_branch_name: Option<String>,
    pub seller_status: SellerStatus,
}

impl Seller {
    pub fn branch_label(&self) -> &str {
        self.seller_branch_name.as_deref().unwrap_or("—")
    }
}

/// Body of `POST /vendedores`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSellerRequest {
    pub dni: String,
    pub full_name: String,
    pub seller_type: SellerType,
    pub branch_id: i64,
}

/// Raw input of the seller creation form.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerForm {
    pub dni: String,
    pub full_name: String,
    pub seller_type: SellerType,
    pub branch_id: Option<i64>,
}

impl Default for SellerForm {
    fn default() -> Self {
        Self {
            dni: String::new(),
            full_name: String::new(),
            seller_type: SellerType::Internal,
            branch_id: None,
        }
    }
}

impl SellerForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let dni = self.dni.trim();
        if dni.len() != 8 || !dni.chars().all(|c| c.is_ascii_digit()) {
            errors.push(FieldError::new("dni", "El DNI debe tener 8 dígitos"));
        }
        if self.full_name.trim().is_empty() {
            errors.push(FieldError::new("fullName", "Ingrese los nombres del vendedor"));
        }
        if self.branch_id.is_none() {
            errors.push(FieldError::new("branchId", "Seleccione una sede"));
        }

        errors
    }

    pub fn to_request(&self) -> Result<CreateSellerRequest, Vec<FieldError>> {
        let errors = self.validate();
        match self.branch_id {
            Some(branch_id) if errors.is_empty() => Ok(CreateSellerRequest {
                dni: self.dni.trim().to_string(),
                full_name: self.full_name.trim().to_string(),
                seller_type: self.seller_type,
                branch_id,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seller_decodes_wire_names() {
        let json = r#"{
            "sellerId": 7,
            "dni": "45678912",
            "fullName": "Rosa Quispe",
            "sellerType": "EXTERNAL",
            "sellerBranchName": "Sede Miraflores",
            "sellerStatus": "INACTIVE"
        }"#;
        let seller: Seller = serde_json::from_str(json).unwrap();
        assert_eq!(seller.seller_id, 7);
        assert_eq!(seller.seller_type, SellerType::External);
        assert_eq!(seller.seller_status, SellerStatus::Inactive);
        assert_eq!(seller.branch_label(), "Sede Miraflores");
    }

    #[test]
    fn test_form_requires_eight_digit_dni() {
        let form = SellerForm {
            dni: "1234567a".into(),
            full_name: "Luis Torres".into(),
            seller_type: SellerType::Internal,
            branch_id: Some(1),
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "dni");
    }

    #[test]
    fn test_form_to_request_trims() {
        let form = SellerForm {
            dni: " 12345678 ".into(),
            full_name: " Luis Torres ".into(),
            seller_type: SellerType::External,
            branch_id: Some(3),
        };
        let req = form.to_request().unwrap();
        assert_eq!(req.dni, "12345678");
        assert_eq!(req.full_name, "Luis Torres");
        assert_eq!(req.branch_id, 3);
    }

    #[test]
    fn test_form_missing_branch_blocks_request() {
        let form = SellerForm {
            dni: "12345678".into(),
            full_name: "Luis Torres".into(),
            ..SellerForm::default()
        };
        let errors = form.to_request().unwrap_err();
        assert_eq!(errors[0].field, "branchId");
    }
}
