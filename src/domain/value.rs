#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Message priority (`priority`).
///
/// The integer wire values are part of the Pushover contract, not just the
/// ordering: Lowest=-2, Low=-1, Normal=0, High=1, Emergency=2.
pub enum Priority {
    Lowest,
    Low,
    #[default]
    Normal,
    High,
    Emergency,
}

impl Priority {
    /// Form field name used by Pushover (`priority`).
    pub const FIELD: &'static str = "priority";

    /// Integer value sent on the wire.
    pub fn value(self) -> i8 {
        match self {
            Self::Lowest => -2,
            Self::Low => -1,
            Self::Normal => 0,
            Self::High => 1,
            Self::Emergency => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Alert sound played on the receiving device (`sound`).
///
/// [`Sound::Default`] is a sentinel meaning "omit the field, let the service
/// choose"; it never produces an empty-string field on the wire.
pub enum Sound {
    #[default]
    Default,
    Pushover,
    Bike,
    Bugle,
    Cashregister,
    Classical,
    Cosmic,
    Falling,
    Gamelan,
    Incoming,
    Intermission,
    Magic,
    Mechanical,
    Pianobar,
    Siren,
    Spacealarm,
    Tugboat,
    Alien,
    Climb,
    Persistent,
    Echo,
    Updown,
    None,
}

impl Sound {
    /// Form field name used by Pushover (`sound`).
    pub const FIELD: &'static str = "sound";

    /// Canonical lowercase name sent on the wire, or `None` for the
    /// [`Sound::Default`] sentinel.
    pub fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::Default => return None,
            Self::Pushover => "pushover",
            Self::Bike => "bike",
            Self::Bugle => "bugle",
            Self::Cashregister => "cashregister",
            Self::Classical => "classical",
            Self::Cosmic => "cosmic",
            Self::Falling => "falling",
            Self::Gamelan => "gamelan",
            Self::Incoming => "incoming",
            Self::Intermission => "intermission",
            Self::Magic => "magic",
            Self::Mechanical => "mechanical",
            Self::Pianobar => "pianobar",
            Self::Siren => "siren",
            Self::Spacealarm => "spacealarm",
            Self::Tugboat => "tugboat",
            Self::Alien => "alien",
            Self::Climb => "climb",
            Self::Persistent => "persistent",
            Self::Echo => "echo",
            Self::Updown => "updown",
            Self::None => "none",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Unix timestamp in seconds (`timestamp`).
///
/// Absent means "use server receipt time".
pub struct UnixTimestamp(u64);

impl UnixTimestamp {
    /// Form field name used by Pushover (`timestamp`).
    pub const FIELD: &'static str = "timestamp";

    /// Create a timestamp value (no range validation is performed).
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> u64 {
        self.0
    }
}
