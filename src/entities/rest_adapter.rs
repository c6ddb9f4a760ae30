use crate::{HttpAdapter, HttpMethod};

pub const REST_ADAPTER_TYPE: &str = "REST";

#[derive(Debug, Clone)]
pub struct RestHttpAdapter {
    adapter_type: String,
}

impl RestHttpAdapter {
    pub fn new() -> Self {
        Self {
            adapter_type: REST_ADAPTER_TYPE.to_string(),
        }
    }

    fn call(&self, method: HttpMethod) -> String {
        tracing::info!(adapter = %self.adapter_type, %method, "http adapter called");
        format!("[{}] {} method", self.adapter_type, method)
    }
}

impl Default for RestHttpAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpAdapter for RestHttpAdapter {
    fn adapter_type(&self) -> &str {
        &self.adapter_type
    }

    fn get(&self) -> String {
        self.call(HttpMethod::Get)
    }

    fn post(&self) -> String {
        self.call(HttpMethod::Post)
    }

    fn put(&self) -> String {
        self.call(HttpMethod::Put)
    }

    fn delete(&self) -> String {
        self.call(HttpMethod::Delete)
    }
}
