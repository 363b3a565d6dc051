use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BranchType {
    CentroServicio,
    CallCenter,
    Modulo,
    AgenteAutorizado,
}

impl BranchType {
    pub fn label(&self) -> &'static str {
        match self {
            BranchType::CentroServicio => "Centro de Servicio",
            BranchType::CallCenter => "Call Center",
            BranchType::Modulo => "Módulo",
            BranchType::AgenteAutorizado => "Agente Autorizado",
        }
    }
}

/// Sede (sales branch). Read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: i64,
    pub nombre: String,
    pub tipo: BranchType,
    #[serde(default)]
    pub direccion: String,
    #[serde(default)]
    pub capacidad_maxima: Option<u32>,
    pub activo: bool,
    #[serde(default)]
    pub almacen_id: Option<i64>,
}

impl Branch {
    pub fn capacity_label(&self) -> String {
        self.capacidad_maxima
            .map(|c| c.to_string())
            .unwrap_or_else(|| "Sin límite".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_optional_fields() {
        let json = r#"{"id":2,"nombre":"Call Center Lima","tipo":"CALL_CENTER","activo":true}"#;
        let branch: Branch = serde_json::from_str(json).unwrap();
        assert_eq!(branch.tipo, BranchType::CallCenter);
        assert_eq!(branch.capacity_label(), "Sin límite");
        assert!(branch.almacen_id.is_none());
        assert_eq!(branch.tipo.label(), "Call Center");
    }
}
