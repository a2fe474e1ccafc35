//! In-memory platform
//!
//! Headless implementations of every platform capability. They keep the
//! same relationships a native toolkit keeps (a stack owns its screens, a
//! screen points back at its stack, a tab container owns its stacks) and
//! record every transition they perform so the `animated` flag can be
//! observed.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::container::{NavigationController, TabBarController};
use crate::screen::{same_screen, Screen, ScreenKind, ScreenRef};
use crate::transition::{Transition, TransitionKind};

// =============================================================================
// Screen
// =============================================================================

/// A screen with no visual content
pub struct HeadlessScreen {
    this: Weak<Self>,
    id: Uuid,
    kind: ScreenKind,
    /// Back reference set by the owning stack
    navigation_controller: RefCell<Option<Weak<dyn NavigationController>>>,
    /// Modal presented by this screen (owned)
    presented: RefCell<Option<ScreenRef>>,
    /// Back reference set by the presenter
    presenting: RefCell<Option<Weak<dyn Screen>>>,
    transitions: RefCell<Vec<Transition>>,
}

impl HeadlessScreen {
    /// Create a new screen of the given kind
    pub fn new(kind: ScreenKind) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            this: this.clone(),
            id: Uuid::new_v4(),
            kind,
            navigation_controller: RefCell::new(None),
            presented: RefCell::new(None),
            presenting: RefCell::new(None),
            transitions: RefCell::new(Vec::new()),
        })
    }

    /// Unique id of this screen
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Present/dismiss transitions performed by this screen
    pub fn transitions(&self) -> Vec<Transition> {
        self.transitions.borrow().clone()
    }
}

impl Screen for HeadlessScreen {
    fn kind(&self) -> ScreenKind {
        self.kind
    }

    fn navigation_controller(&self) -> Option<Rc<dyn NavigationController>> {
        self.navigation_controller
            .borrow()
            .as_ref()
            .and_then(Weak::upgrade)
    }

    fn present(&self, screen: ScreenRef, animated: bool) {
        let is_self = self
            .this
            .upgrade()
            .is_some_and(|this| same_screen(&(this as ScreenRef), &screen));
        if is_self {
            warn!(screen = %self.kind, id = %self.id, "Screen cannot present itself");
            return;
        }
        if screen.presenting().is_some() {
            warn!(
                screen = %screen.kind(),
                "Screen is already presented elsewhere, ignoring present"
            );
            return;
        }

        let mut presented = self.presented.borrow_mut();
        if presented.is_some() {
            warn!(
                screen = %self.kind,
                id = %self.id,
                "Already presenting a screen, ignoring present of {}",
                screen.kind()
            );
            return;
        }
        let this: Weak<dyn Screen> = self.this.clone();
        screen.set_presenting(Some(this));
        *presented = Some(screen);
        drop(presented);
        self.transitions
            .borrow_mut()
            .push(Transition::new(TransitionKind::Present, animated));
    }

    fn dismiss(&self, animated: bool) {
        // Drop the modal only after the borrow is released
        let dismissed = self.presented.borrow_mut().take();
        if let Some(dismissed) = dismissed {
            dismissed.set_presenting(None);
            self.transitions
                .borrow_mut()
                .push(Transition::new(TransitionKind::Dismiss, animated));
            return;
        }

        if let Some(presenter) = self.presenting() {
            presenter.dismiss(animated);
        }
    }

    fn presented(&self) -> Option<ScreenRef> {
        self.presented.borrow().clone()
    }

    fn set_navigation_controller(&self, controller: Option<Weak<dyn NavigationController>>) {
        *self.navigation_controller.borrow_mut() = controller;
    }

    fn presenting(&self) -> Option<ScreenRef> {
        self.presenting.borrow().as_ref().and_then(Weak::upgrade)
    }

    fn set_presenting(&self, presenter: Option<Weak<dyn Screen>>) {
        *self.presenting.borrow_mut() = presenter;
    }
}

impl fmt::Debug for HeadlessScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessScreen")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("presenting", &self.presented.borrow().is_some())
            .field("presented_by", &self.presenting().map(|s| s.kind()))
            .finish()
    }
}

// =============================================================================
// Navigation Controller
// =============================================================================

/// An in-memory navigation stack
pub struct HeadlessNavigationController {
    this: Weak<Self>,
    /// Stack entries (bottom to top)
    stack: RefCell<Vec<ScreenRef>>,
    tab_bar_controller: RefCell<Option<Weak<dyn TabBarController>>>,
    transitions: RefCell<Vec<Transition>>,
}

impl HeadlessNavigationController {
    /// Create a new navigation stack with a root screen
    pub fn new(root: ScreenRef) -> Rc<Self> {
        let controller = Rc::new_cyclic(|this| Self {
            this: this.clone(),
            stack: RefCell::new(Vec::new()),
            tab_bar_controller: RefCell::new(None),
            transitions: RefCell::new(Vec::new()),
        });
        controller.attach(&root);
        controller.stack.borrow_mut().push(root);
        controller
    }

    /// Get stack depth
    pub fn depth(&self) -> usize {
        self.stack.borrow().len()
    }

    /// Check if there is anything above the root
    pub fn can_go_back(&self) -> bool {
        self.depth() > 1
    }

    /// Transitions performed by this stack, oldest first
    pub fn transitions(&self) -> Vec<Transition> {
        self.transitions.borrow().clone()
    }

    fn attach(&self, screen: &ScreenRef) {
        let this: Weak<dyn NavigationController> = self.this.clone();
        screen.set_navigation_controller(Some(this));
    }

    fn detach(screens: &[ScreenRef]) {
        for screen in screens {
            screen.set_navigation_controller(None);
        }
    }

    fn record(&self, kind: TransitionKind, animated: bool) {
        self.transitions
            .borrow_mut()
            .push(Transition::new(kind, animated));
    }

    fn truncate_after(&self, index: usize) -> Vec<ScreenRef> {
        let mut stack = self.stack.borrow_mut();
        if index + 1 >= stack.len() {
            return Vec::new();
        }
        stack.drain(index + 1..).collect()
    }
}

impl NavigationController for HeadlessNavigationController {
    fn screens(&self) -> Vec<ScreenRef> {
        self.stack.borrow().clone()
    }

    fn push(&self, screen: ScreenRef, animated: bool) {
        if self.stack.borrow().iter().any(|s| same_screen(s, &screen)) {
            warn!(screen = %screen.kind(), "Screen is already in the stack, ignoring push");
            return;
        }
        self.attach(&screen);
        debug!(screen = %screen.kind(), depth = self.depth() + 1, "push");
        self.stack.borrow_mut().push(screen);
        self.record(TransitionKind::Push, animated);
    }

    fn pop(&self, animated: bool) -> Option<ScreenRef> {
        let popped = {
            let mut stack = self.stack.borrow_mut();
            if stack.len() > 1 {
                stack.pop()
            } else {
                None
            }
        }?;
        popped.set_navigation_controller(None);
        self.record(TransitionKind::Pop, animated);
        Some(popped)
    }

    fn pop_to_root(&self, animated: bool) -> Vec<ScreenRef> {
        let popped = self.truncate_after(0);
        if !popped.is_empty() {
            Self::detach(&popped);
            self.record(TransitionKind::PopToRoot, animated);
        }
        popped
    }

    fn pop_to(&self, screen: &ScreenRef, animated: bool) -> Option<Vec<ScreenRef>> {
        let index = self
            .stack
            .borrow()
            .iter()
            .position(|s| same_screen(s, screen))?;
        let popped = self.truncate_after(index);
        if !popped.is_empty() {
            Self::detach(&popped);
            self.record(TransitionKind::PopTo, animated);
        }
        Some(popped)
    }

    fn tab_bar_controller(&self) -> Option<Rc<dyn TabBarController>> {
        self.tab_bar_controller
            .borrow()
            .as_ref()
            .and_then(Weak::upgrade)
    }
}

impl fmt::Debug for HeadlessNavigationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<ScreenKind> = self.stack.borrow().iter().map(|s| s.kind()).collect();
        f.debug_struct("HeadlessNavigationController")
            .field("stack", &kinds)
            .finish()
    }
}

// =============================================================================
// Tab Bar Controller
// =============================================================================

/// An in-memory tab container
pub struct HeadlessTabBarController {
    this: Weak<Self>,
    tabs: RefCell<Vec<Rc<HeadlessNavigationController>>>,
    tab_bar_hidden: Cell<bool>,
}

impl HeadlessTabBarController {
    /// Create an empty tab container with a visible tab bar
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            this: this.clone(),
            tabs: RefCell::new(Vec::new()),
            tab_bar_hidden: Cell::new(false),
        })
    }

    /// Add a navigation stack as a tab
    pub fn add_tab(&self, controller: Rc<HeadlessNavigationController>) {
        let this: Weak<dyn TabBarController> = self.this.clone();
        *controller.tab_bar_controller.borrow_mut() = Some(this);
        self.tabs.borrow_mut().push(controller);
    }

    /// Get all tabs in order
    pub fn tabs(&self) -> Vec<Rc<HeadlessNavigationController>> {
        self.tabs.borrow().clone()
    }
}

impl TabBarController for HeadlessTabBarController {
    fn is_tab_bar_hidden(&self) -> bool {
        self.tab_bar_hidden.get()
    }

    fn set_tab_bar_hidden(&self, hidden: bool) {
        self.tab_bar_hidden.set(hidden);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: ScreenKind = ScreenKind::new("Home");
    const FEED: ScreenKind = ScreenKind::new("Feed");
    const POST: ScreenKind = ScreenKind::new("Post");
    const COMPOSER: ScreenKind = ScreenKind::new("Composer");

    fn screen(kind: ScreenKind) -> ScreenRef {
        HeadlessScreen::new(kind)
    }

    fn kinds(controller: &HeadlessNavigationController) -> Vec<ScreenKind> {
        controller.screens().iter().map(|s| s.kind()).collect()
    }

    #[test]
    fn test_navigation_stack_push_pop() {
        let nav = HeadlessNavigationController::new(screen(HOME));
        assert_eq!(nav.depth(), 1);
        assert!(!nav.can_go_back());

        nav.push(screen(FEED), true);
        assert_eq!(nav.depth(), 2);
        assert!(nav.can_go_back());
        assert_eq!(nav.top().unwrap().kind(), FEED);

        let popped = nav.pop(true).unwrap();
        assert_eq!(popped.kind(), FEED);
        assert_eq!(nav.top().unwrap().kind(), HOME);

        // Can't pop past root
        assert!(nav.pop(true).is_none());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_screens_point_back_at_their_stack() {
        let root = screen(HOME);
        let nav = HeadlessNavigationController::new(Rc::clone(&root));
        let feed = screen(FEED);

        assert!(root.navigation_controller().is_some());
        assert!(feed.navigation_controller().is_none());

        nav.push(Rc::clone(&feed), false);
        assert!(feed.navigation_controller().is_some());

        nav.pop(false);
        assert!(feed.navigation_controller().is_none());
    }

    #[test]
    fn test_back_reference_does_not_keep_stack_alive() {
        let root = screen(HOME);
        let nav = HeadlessNavigationController::new(Rc::clone(&root));
        assert!(root.navigation_controller().is_some());

        drop(nav);
        assert!(root.navigation_controller().is_none());
    }

    #[test]
    fn test_pop_to_root_truncates_to_first() {
        let nav = HeadlessNavigationController::new(screen(HOME));
        nav.push(screen(FEED), true);
        nav.push(screen(POST), true);

        let popped = nav.pop_to_root(false);
        assert_eq!(popped.len(), 2);
        assert_eq!(kinds(&nav), vec![HOME]);
        assert_eq!(
            nav.transitions().last(),
            Some(&Transition::new(TransitionKind::PopToRoot, false))
        );
    }

    #[test]
    fn test_pop_to_root_at_root_records_nothing() {
        let nav = HeadlessNavigationController::new(screen(HOME));
        assert!(nav.pop_to_root(true).is_empty());
        assert!(nav.transitions().is_empty());
    }

    #[test]
    fn test_pop_to_keeps_target() {
        let nav = HeadlessNavigationController::new(screen(HOME));
        let feed = screen(FEED);
        nav.push(Rc::clone(&feed), true);
        nav.push(screen(POST), true);
        nav.push(screen(POST), true);

        let popped = nav.pop_to(&feed, true).unwrap();
        assert_eq!(popped.len(), 2);
        assert_eq!(kinds(&nav), vec![HOME, FEED]);
        assert!(same_screen(&nav.top().unwrap(), &feed));
    }

    #[test]
    fn test_pop_to_missing_screen_is_noop() {
        let nav = HeadlessNavigationController::new(screen(HOME));
        nav.push(screen(FEED), true);
        let before = nav.transitions().len();

        assert!(nav.pop_to(&screen(FEED), true).is_none());
        assert_eq!(kinds(&nav), vec![HOME, FEED]);
        assert_eq!(nav.transitions().len(), before);
    }

    #[test]
    fn test_pushing_same_screen_twice_is_ignored() {
        let nav = HeadlessNavigationController::new(screen(HOME));
        let feed = screen(FEED);
        nav.push(Rc::clone(&feed), true);
        nav.push(Rc::clone(&feed), true);
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_push_records_animation_flag() {
        let nav = HeadlessNavigationController::new(screen(HOME));
        nav.push(screen(FEED), false);
        nav.push(screen(POST), true);
        assert_eq!(
            nav.transitions(),
            vec![
                Transition::new(TransitionKind::Push, false),
                Transition::new(TransitionKind::Push, true),
            ]
        );
    }

    #[test]
    fn test_present_and_dismiss() {
        let home = HeadlessScreen::new(HOME);
        assert!(home.presented().is_none());

        home.present(screen(COMPOSER), true);
        assert_eq!(home.presented().unwrap().kind(), COMPOSER);

        // A second present while presenting is ignored
        home.present(screen(POST), true);
        assert_eq!(home.presented().unwrap().kind(), COMPOSER);

        home.dismiss(false);
        assert!(home.presented().is_none());

        // Nothing left to dismiss
        home.dismiss(true);
        assert_eq!(
            home.transitions(),
            vec![
                Transition::new(TransitionKind::Present, true),
                Transition::new(TransitionKind::Dismiss, false),
            ]
        );
    }

    #[test]
    fn test_presented_screen_dismisses_itself() {
        let home = HeadlessScreen::new(HOME);
        let home_ref: ScreenRef = home.clone();
        let composer = screen(COMPOSER);
        home.present(Rc::clone(&composer), true);
        assert!(same_screen(&composer.presenting().unwrap(), &home_ref));

        // Nothing presented on the composer, so it asks home to close it
        composer.dismiss(false);
        assert!(home.presented().is_none());
        assert!(composer.presenting().is_none());

        // Once closed there is nobody left to forward to
        composer.dismiss(true);
        assert_eq!(
            home.transitions(),
            vec![
                Transition::new(TransitionKind::Present, true),
                Transition::new(TransitionKind::Dismiss, false),
            ]
        );
    }

    #[test]
    fn test_present_self_is_ignored() {
        let home = HeadlessScreen::new(HOME);
        let home_ref: ScreenRef = home.clone();
        home.present(Rc::clone(&home_ref), true);

        assert!(home.presented().is_none());
        assert!(home.transitions().is_empty());

        // No cycle left behind
        let weak = Rc::downgrade(&home);
        drop(home_ref);
        drop(home);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_present_screen_presented_elsewhere_is_ignored() {
        let home = screen(HOME);
        let feed = HeadlessScreen::new(FEED);
        let composer = screen(COMPOSER);
        home.present(Rc::clone(&composer), true);

        feed.present(Rc::clone(&composer), true);
        assert!(feed.presented().is_none());
        assert!(feed.transitions().is_empty());
        assert!(same_screen(&composer.presenting().unwrap(), &home));
    }

    #[test]
    fn test_presented_screen_outlives_released_presenter() {
        let composer = screen(COMPOSER);
        {
            let home = screen(HOME);
            home.present(Rc::clone(&composer), true);
        }

        assert!(composer.presenting().is_none());
        composer.dismiss(true);
    }

    #[test]
    fn test_tab_bar_reachable_through_stack() {
        let root = screen(HOME);
        let nav = HeadlessNavigationController::new(Rc::clone(&root));
        assert!(root.tab_bar_controller().is_none());

        let tabs = HeadlessTabBarController::new();
        tabs.add_tab(Rc::clone(&nav));
        assert_eq!(tabs.tabs().len(), 1);

        let tab_bar = root.tab_bar_controller().unwrap();
        assert!(!tab_bar.is_tab_bar_hidden());
        tab_bar.set_tab_bar_hidden(true);
        assert!(tabs.is_tab_bar_hidden());
    }
}
