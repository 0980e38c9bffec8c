use uuid::Uuid;

/// Produces the unique suffix of entity ids (`thread-<suffix>`, ...).
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

#[derive(Debug, Clone, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Always yields the same suffix; lets adapter tests predict ids.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct FixedIdGenerator(pub &'static str);

#[cfg(test)]
impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_generator_yields_distinct_hex_suffixes() {
        let generator = UuidIdGenerator;

        let a = generator.generate();
        let b = generator.generate();

        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
