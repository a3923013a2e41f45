pub trait Validate {
    fn validate(&self) -> Result<(), String>;

    /// Brings a freshly loaded record back into range before it is validated.
    /// Saving never repairs: out-of-range values are rejected there.
    fn repair(&mut self) {}
}
