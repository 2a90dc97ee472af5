use crate::core::greeter::greet;
use crate::core::NameProvider;
use crate::utils::error::Result;
use std::io::Write;

pub struct GreetEngine<P: NameProvider> {
    provider: P,
}

impl<P: NameProvider> GreetEngine<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Writes the greeting as a single line to `out` and returns it.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<String> {
        let name = self.provider.name();
        tracing::debug!("Greeting name: {:?}", name);

        let greeting = greet(name);

        writeln!(out, "{}", greeting)?;
        out.flush()?;
        tracing::debug!("Wrote {} bytes", greeting.len() + 1);

        Ok(greeting)
    }
}
