use std::fmt;

use tracing::{debug, info};

use crate::destination::Destination;
use crate::error::CoreError;

/// Top-level screen the application is currently displaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Login gate shown at startup.
    #[default]
    Authentication,
    /// Destination list, with the selected destination's detail inline.
    MainList,
    /// Form for creating a destination.
    AddDestination,
}

impl Screen {
    pub fn label(self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::MainList => "destination list",
            Self::AddDestination => "add destination",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A request to move between screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Authenticate,
    OpenAdd,
    FinishAdd,
    CancelAdd,
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Authenticate => "authenticate",
            Self::OpenAdd => "open the add form",
            Self::FinishAdd => "submit the add form",
            Self::CancelAdd => "cancel the add form",
        })
    }
}

/// What happens to a destination submitted from the add form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddedDestinationPolicy {
    /// Construct it and drop it; the list is unchanged.
    Discard,
    /// Append it to the end of the list.
    #[default]
    Append,
}

/// Change notification emitted by every successful transition.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    ScreenChanged { from: Screen, to: Screen },
    Authenticated,
    DestinationAdded { index: usize },
    DestinationDiscarded { name: String },
}

/// Owns the current screen, the session flag, and the destination list.
///
/// Screens never switch themselves: they report what the user did and the
/// shell calls the matching transition here. Observers learn about changes
/// through [`Navigator::drain_events`] and [`Navigator::revision`].
#[derive(Debug)]
pub struct Navigator {
    screen: Screen,
    authenticated: bool,
    destinations: Vec<Destination>,
    policy: AddedDestinationPolicy,
    revision: u64,
    events: Vec<NavEvent>,
}

impl Navigator {
    pub fn new(destinations: Vec<Destination>, policy: AddedDestinationPolicy) -> Self {
        Self {
            screen: Screen::default(),
            authenticated: false,
            destinations,
            policy,
            revision: 0,
            events: Vec::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn policy(&self) -> AddedDestinationPolicy {
        self.policy
    }

    /// Incremented on every state change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Take the events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<NavEvent> {
        std::mem::take(&mut self.events)
    }

    /// Login succeeded: set the session flag and show the list.
    pub fn authenticate(&mut self) -> crate::Result<()> {
        self.expect_screen(Screen::Authentication, NavAction::Authenticate)?;
        self.authenticated = true;
        info!("Session authenticated");
        self.emit(NavEvent::Authenticated);
        self.go_to(Screen::MainList);
        Ok(())
    }

    /// Floating action on the list screen.
    pub fn open_add(&mut self) -> crate::Result<()> {
        self.expect_screen(Screen::MainList, NavAction::OpenAdd)?;
        self.go_to(Screen::AddDestination);
        Ok(())
    }

    /// The add form produced `destination`; return to the list.
    ///
    /// Returns the destination's index when the policy keeps it.
    pub fn finish_add(&mut self, destination: Destination) -> crate::Result<Option<usize>> {
        self.expect_screen(Screen::AddDestination, NavAction::FinishAdd)?;
        let index = match self.policy {
            AddedDestinationPolicy::Append => {
                self.destinations.push(destination);
                let index = self.destinations.len() - 1;
                info!("Added destination #{index}");
                self.emit(NavEvent::DestinationAdded { index });
                Some(index)
            }
            AddedDestinationPolicy::Discard => {
                debug!("Discarding new destination {:?}", destination.name());
                self.emit(NavEvent::DestinationDiscarded {
                    name: destination.name().to_string(),
                });
                None
            }
        };
        self.go_to(Screen::MainList);
        Ok(index)
    }

    /// Leave the add form without creating anything.
    pub fn cancel_add(&mut self) -> crate::Result<()> {
        self.expect_screen(Screen::AddDestination, NavAction::CancelAdd)?;
        self.go_to(Screen::MainList);
        Ok(())
    }

    fn expect_screen(&self, expected: Screen, action: NavAction) -> crate::Result<()> {
        if self.screen == expected {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                from: self.screen,
                action,
            })
        }
    }

    fn go_to(&mut self, to: Screen) {
        let from = self.screen;
        self.screen = to;
        debug!("Screen {from} -> {to}");
        self.emit(NavEvent::ScreenChanged { from, to });
    }

    fn emit(&mut self, event: NavEvent) {
        self.revision = self.revision.wrapping_add(1);
        self.events.push(event);
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(crate::seed::seed_destinations(), AddedDestinationPolicy::default())
    }
}
