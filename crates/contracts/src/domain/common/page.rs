use serde::{Deserialize, Serialize};

/// Pagination envelope returned by every list endpoint.
///
/// `number` is the zero-based page index. The backend omits `number`/`size`
/// on a few endpoints, hence the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub number: usize,
    #[serde(default)]
    pub size: usize,
    #[serde(default)]
    pub total_elements: usize,
    #[serde(default)]
    pub total_pages: usize,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            number: 0,
            size: 0,
            total_elements: 0,
            total_pages: 0,
        }
    }
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Fill in `number`/`size` from the request when the server left them out.
    pub fn with_request(mut self, page: usize, size: usize) -> Self {
        if self.size == 0 {
            self.number = page;
            self.size = size;
        }
        self
    }
}

/// Error body of a non-2xx response. Some services answer with `message`,
/// others with `mensaje`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub mensaje: Option<String>,
}

impl ApiMessage {
    pub fn text(&self) -> Option<&str> {
        [self.message.as_deref(), self.mensaje.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|m| !m.is_empty())
    }
}
