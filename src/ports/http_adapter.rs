use crate::HttpMethod;

pub trait HttpAdapter: Send + Sync {
    /// Adapter flavour supplied at construction, e.g. `REST`.
    fn adapter_type(&self) -> &str;

    fn get(&self) -> String;

    fn post(&self) -> String;

    fn put(&self) -> String;

    fn delete(&self) -> String;

    fn request(&self, method: HttpMethod) -> String {
        match method {
            HttpMethod::Get => self.get(),
            HttpMethod::Post => self.post(),
            HttpMethod::Put => self.put(),
            HttpMethod::Delete => self.delete(),
        }
    }
}

pub trait HttpAdapterFactory: Send + Sync {
    fn make_adapter(&self) -> Box<dyn HttpAdapter>;
}
