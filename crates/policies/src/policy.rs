/// Boolean action predicates shared by every policy.
///
/// Everything defaults to deny: a policy only opts into the actions it
/// grants, so an unauthenticated actor or an unhandled action falls through
/// to `false` instead of erroring.
pub trait Policy {
    fn index(&self) -> bool {
        false
    }

    fn show(&self) -> bool {
        false
    }

    fn create(&self) -> bool {
        false
    }

    /// Rendering the creation form is gated the same as creating.
    fn new_record(&self) -> bool {
        self.create()
    }

    fn update(&self) -> bool {
        false
    }

    /// Rendering the edit form is gated the same as updating.
    fn edit(&self) -> bool {
        self.update()
    }

    fn destroy(&self) -> bool {
        false
    }
}
