// src/factories/http_adapter_factory.rs

use crate::{HttpAdapter, HttpAdapterFactory, RestHttpAdapter};

#[derive(Debug, Clone, Copy, Default)]
pub struct RestHttpAdapterFactory;

impl HttpAdapterFactory for RestHttpAdapterFactory {
    fn make_adapter(&self) -> Box<dyn HttpAdapter> {
        Box::new(RestHttpAdapter::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_makes_rest_adapter() {
        let adapter = RestHttpAdapterFactory.make_adapter();
        assert_eq!(adapter.adapter_type(), "REST");
        assert_eq!(adapter.get(), "[REST] GET method");
    }

    #[test]
    fn test_each_call_returns_a_fresh_adapter() {
        let factory = RestHttpAdapterFactory;
        let first = factory.make_adapter();
        let second = factory.make_adapter();
        assert!(!std::ptr::addr_eq(&*first, &*second));
    }
}
