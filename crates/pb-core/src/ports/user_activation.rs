/// Source of truth for "is this call within a transient-activation window".
pub trait UserActivationPort: Send + Sync {
    fn has_transient_activation(&self) -> bool;
}

#[cfg(test)]
mockall::mock! {
    pub UserActivation {}

    impl UserActivationPort for UserActivation {
        fn has_transient_activation(&self) -> bool;
    }
}
