pub mod pointer;
pub mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use yew_garden::GardenSession;

pub use pointer::PointerState;

/// Shared handle to the one garden session; compares by identity so it can
/// travel through component props.
#[derive(Clone)]
pub struct SessionHandle(pub Rc<RefCell<GardenSession>>);

impl SessionHandle {
    pub fn new(session: GardenSession) -> Self {
        Self(Rc::new(RefCell::new(session)))
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
