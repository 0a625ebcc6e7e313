use std::cell::Cell;
use std::rc::Rc;

use log::warn;

use crate::person::Person;

/// The seam to the external health authority. The state machine calls
/// `notify` when a person crosses the life-threatening (but not yet fatal)
/// threshold during a day step; what the authority does with that is up to
/// the implementation.
pub trait HealthAuthority {
    fn notify(&mut self, person: &Person);
}

/// Default authority: ignores notifications.
pub struct NullHealthAuthority;

impl HealthAuthority for NullHealthAuthority {
    fn notify(&mut self, _person: &Person) {}
}

/// A minimal department of health that logs each escalation and counts
/// hospital referrals. The count is held behind a shared handle so it stays
/// readable after the department is boxed into a context.
pub struct DepartmentOfHealth {
    hospitalizations: Rc<Cell<usize>>,
}

impl DepartmentOfHealth {
    pub fn new() -> DepartmentOfHealth {
        DepartmentOfHealth {
            hospitalizations: Rc::new(Cell::new(0)),
        }
    }

    /// A handle to the running referral count.
    pub fn hospitalization_count(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.hospitalizations)
    }
}

impl Default for DepartmentOfHealth {
    fn default() -> Self {
        DepartmentOfHealth::new()
    }
}

impl HealthAuthority for DepartmentOfHealth {
    fn notify(&mut self, person: &Person) {
        self.hospitalizations.set(self.hospitalizations.get() + 1);
        warn!(
            "hospital referral: temperature {:.1} C, hydration {:.1} ({:.0}% of weight)",
            person.temperature(),
            person.hydration(),
            100.0 * person.hydration() / person.weight()
        );
    }
}
