/// A CLI verb. Commands own their arguments and build whatever runtime
/// they need inside `call`.
pub trait CallableTrait {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>>;
}
