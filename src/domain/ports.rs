/// Source of the name the engine greets.
pub trait NameProvider {
    fn name(&self) -> &str;
}

impl<T: NameProvider + ?Sized> NameProvider for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

impl NameProvider for str {
    fn name(&self) -> &str {
        self
    }
}

impl NameProvider for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
