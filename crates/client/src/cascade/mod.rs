//! The cascading jurisdiction selector as a pure state machine.
//!
//! `State → District → CourtComplex → Judge` form a chain: changing a
//! tier clears everything below it and starts the lookup that feeds the
//! next tier. `Date` and `CaseType` sit outside the chain.
//!
//! Every lookup carries a [`LookupTicket`]. Starting or superseding a
//! lookup bumps its generation, and [`apply_lookup_result`] drops any
//! response whose ticket no longer matches, so a slow reply for an old
//! selection can never overwrite the options of a newer one.

pub mod driver;

use chrono::NaiveDate;
use shared_types::{AppError, CaseType, CauseListRequest, JudgeInfo};
use std::collections::HashMap;

// ── Tiers and lookups ───────────────────────────────────────────────

/// One field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    State,
    District,
    CourtComplex,
    Judge,
    Date,
    CaseType,
}

impl Tier {
    /// Key used for inline field errors.
    pub fn field_name(&self) -> &'static str {
        match self {
            Tier::State => "state",
            Tier::District => "district",
            Tier::CourtComplex => "court_complex",
            Tier::Judge => "court_name",
            Tier::Date => "date",
            Tier::CaseType => "case_type",
        }
    }

    /// Chained tiers strictly below this one.
    fn downstream(&self) -> &'static [Tier] {
        match self {
            Tier::State => &[Tier::District, Tier::CourtComplex, Tier::Judge],
            Tier::District => &[Tier::CourtComplex, Tier::Judge],
            Tier::CourtComplex => &[Tier::Judge],
            Tier::Judge | Tier::Date | Tier::CaseType => &[],
        }
    }
}

/// The four remote option lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    States,
    Districts,
    Courts,
    Judges,
}

impl LookupKind {
    /// The lookup that fills a tier's options.
    pub fn for_tier(tier: Tier) -> Option<LookupKind> {
        match tier {
            Tier::State => Some(LookupKind::States),
            Tier::District => Some(LookupKind::Districts),
            Tier::CourtComplex => Some(LookupKind::Courts),
            Tier::Judge => Some(LookupKind::Judges),
            Tier::Date | Tier::CaseType => None,
        }
    }

    /// Error shown when this lookup fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            LookupKind::States => "Failed to load states. Please try again.",
            LookupKind::Districts => "Failed to load districts. Please try again.",
            LookupKind::Courts => "Failed to load court complexes. Please try again.",
            LookupKind::Judges => "Failed to load judges. Please try again.",
        }
    }
}

/// A lookup to perform, with the selection values it depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupQuery {
    States,
    Districts {
        state: String,
    },
    Courts {
        state: String,
        district: String,
    },
    Judges {
        state: String,
        district: String,
        court_complex: String,
    },
}

impl LookupQuery {
    pub fn kind(&self) -> LookupKind {
        match self {
            LookupQuery::States => LookupKind::States,
            LookupQuery::Districts { .. } => LookupKind::Districts,
            LookupQuery::Courts { .. } => LookupKind::Courts,
            LookupQuery::Judges { .. } => LookupKind::Judges,
        }
    }
}

/// Identifies one issued lookup; see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket {
    pub kind: LookupKind,
    pub generation: u64,
}

/// A lookup the caller must perform and feed back through
/// [`apply_lookup_result`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    pub ticket: LookupTicket,
    pub query: LookupQuery,
}

/// Payload of a successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupData {
    States(Vec<String>),
    Districts(Vec<String>),
    Courts(Vec<String>),
    Judges(Vec<JudgeInfo>),
}

impl LookupData {
    pub fn kind(&self) -> LookupKind {
        match self {
            LookupData::States(_) => LookupKind::States,
            LookupData::Districts(_) => LookupKind::Districts,
            LookupData::Courts(_) => LookupKind::Courts,
            LookupData::Judges(_) => LookupKind::Judges,
        }
    }
}

// ── Form state ──────────────────────────────────────────────────────

/// The user's current choices. Empty strings mean "not chosen".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub state: String,
    pub district: String,
    pub court_complex: String,
    /// Optional judge; empty fetches every judge's list.
    pub court_name: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub case_type: CaseType,
}

impl Selection {
    pub fn value(&self, tier: Tier) -> &str {
        match tier {
            Tier::State => &self.state,
            Tier::District => &self.district,
            Tier::CourtComplex => &self.court_complex,
            Tier::Judge => &self.court_name,
            Tier::Date => &self.date,
            Tier::CaseType => self.case_type.as_str(),
        }
    }

    /// Whether `tier` holds a non-blank value.
    pub fn is_set(&self, tier: Tier) -> bool {
        !self.value(tier).trim().is_empty()
    }

    fn clear(&mut self, tier: Tier) {
        match tier {
            Tier::State => self.state.clear(),
            Tier::District => self.district.clear(),
            Tier::CourtComplex => self.court_complex.clear(),
            Tier::Judge => self.court_name.clear(),
            Tier::Date => self.date.clear(),
            Tier::CaseType => self.case_type = CaseType::default(),
        }
    }

    /// Whether every chained tier above `tier` holds a value.
    fn ancestors_set(&self, tier: Tier) -> bool {
        match tier {
            Tier::State | Tier::Date | Tier::CaseType => true,
            Tier::District => self.is_set(Tier::State),
            Tier::CourtComplex => self.is_set(Tier::State) && self.is_set(Tier::District),
            Tier::Judge => {
                self.is_set(Tier::State)
                    && self.is_set(Tier::District)
                    && self.is_set(Tier::CourtComplex)
            }
        }
    }
}

/// Options offered by each select, from the latest applicable lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionLists {
    pub states: Vec<String>,
    pub districts: Vec<String>,
    pub courts: Vec<String>,
    pub judges: Vec<JudgeInfo>,
}

impl OptionLists {
    fn clear(&mut self, kind: LookupKind) {
        match kind {
            LookupKind::States => self.states.clear(),
            LookupKind::Districts => self.districts.clear(),
            LookupKind::Courts => self.courts.clear(),
            LookupKind::Judges => self.judges.clear(),
        }
    }

    fn fill(&mut self, data: LookupData) {
        match data {
            LookupData::States(v) => self.states = v,
            LookupData::Districts(v) => self.districts = v,
            LookupData::Courts(v) => self.courts = v,
            LookupData::Judges(v) => self.judges = v,
        }
    }
}

/// True exactly while the current request for that list is outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingFlags {
    pub states: bool,
    pub districts: bool,
    pub courts: bool,
    pub judges: bool,
}

impl LoadingFlags {
    pub fn get(&self, kind: LookupKind) -> bool {
        match kind {
            LookupKind::States => self.states,
            LookupKind::Districts => self.districts,
            LookupKind::Courts => self.courts,
            LookupKind::Judges => self.judges,
        }
    }

    fn set(&mut self, kind: LookupKind, value: bool) {
        match kind {
            LookupKind::States => self.states = value,
            LookupKind::Districts => self.districts = value,
            LookupKind::Courts => self.courts = value,
            LookupKind::Judges => self.judges = value,
        }
    }

    pub fn any(&self) -> bool {
        self.states || self.districts || self.courts || self.judges
    }
}

/// Current generation per lookup kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generations {
    states: u64,
    districts: u64,
    courts: u64,
    judges: u64,
}

impl Generations {
    pub fn get(&self, kind: LookupKind) -> u64 {
        match kind {
            LookupKind::States => self.states,
            LookupKind::Districts => self.districts,
            LookupKind::Courts => self.courts,
            LookupKind::Judges => self.judges,
        }
    }

    fn bump(&mut self, kind: LookupKind) -> u64 {
        let slot = match kind {
            LookupKind::States => &mut self.states,
            LookupKind::Districts => &mut self.districts,
            LookupKind::Courts => &mut self.courts,
            LookupKind::Judges => &mut self.judges,
        };
        *slot = slot.wrapping_add(1);
        *slot
    }
}

/// Everything the cascade form renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub selection: Selection,
    pub options: OptionLists,
    pub loading: LoadingFlags,
    pub generations: Generations,
    /// Most recent lookup failure, cleared when the next lookup starts.
    pub error: Option<String>,
}

impl FormState {
    /// All required fields (state, district, court complex, date) are set.
    pub fn can_submit(&self) -> bool {
        [Tier::State, Tier::District, Tier::CourtComplex, Tier::Date]
            .into_iter()
            .all(|tier| self.selection.is_set(tier))
    }

    /// Whether the control for `tier` accepts input: its list is not
    /// loading and its parent tier is chosen.
    pub fn is_enabled(&self, tier: Tier) -> bool {
        let loading = LookupKind::for_tier(tier)
            .map(|kind| self.loading.get(kind))
            .unwrap_or(false);
        !loading && self.selection.ancestors_set(tier)
    }

    pub fn is_current(&self, ticket: LookupTicket) -> bool {
        self.generations.get(ticket.kind) == ticket.generation
    }
}

// ── Transitions ─────────────────────────────────────────────────────

/// Start a lookup: supersede any in-flight one of the same kind, clear
/// its list and raise its loading flag.
pub fn begin_lookup(mut state: FormState, query: LookupQuery) -> (FormState, PendingLookup) {
    let kind = query.kind();
    let generation = state.generations.bump(kind);
    state.options.clear(kind);
    state.loading.set(kind, true);
    state.error = None;
    let pending = PendingLookup {
        ticket: LookupTicket { kind, generation },
        query,
    };
    (state, pending)
}

/// The mount-time states lookup.
pub fn begin_initial_load(state: FormState) -> (FormState, PendingLookup) {
    begin_lookup(state, LookupQuery::States)
}

/// Apply a user edit of `tier` to `value`.
///
/// Clears the value, list and loading flag of every chained tier below
/// `tier` and invalidates their in-flight lookups. When the new value is
/// non-empty and a lower tier depends on it, returns the lookup to run.
/// An edit to a tier whose ancestors are not all chosen is ignored.
pub fn apply_field_change(
    mut state: FormState,
    tier: Tier,
    value: &str,
) -> (FormState, Option<PendingLookup>) {
    if !state.selection.ancestors_set(tier) {
        tracing::debug!(?tier, "Ignoring change to a tier whose parent is unset");
        return (state, None);
    }

    match tier {
        Tier::State => state.selection.state = value.to_string(),
        Tier::District => state.selection.district = value.to_string(),
        Tier::CourtComplex => state.selection.court_complex = value.to_string(),
        Tier::Judge => state.selection.court_name = value.to_string(),
        Tier::Date => state.selection.date = value.to_string(),
        Tier::CaseType => state.selection.case_type = CaseType::from_str_or_default(value),
    }

    for &below in tier.downstream() {
        state.selection.clear(below);
        if let Some(kind) = LookupKind::for_tier(below) {
            state.generations.bump(kind);
            state.options.clear(kind);
            state.loading.set(kind, false);
        }
    }

    if value.trim().is_empty() {
        return (state, None);
    }

    let s = &state.selection;
    let query = match tier {
        Tier::State => LookupQuery::Districts {
            state: s.state.clone(),
        },
        Tier::District => LookupQuery::Courts {
            state: s.state.clone(),
            district: s.district.clone(),
        },
        Tier::CourtComplex => LookupQuery::Judges {
            state: s.state.clone(),
            district: s.district.clone(),
            court_complex: s.court_complex.clone(),
        },
        Tier::Judge | Tier::Date | Tier::CaseType => return (state, None),
    };

    let (state, pending) = begin_lookup(state, query);
    (state, Some(pending))
}

/// Feed a lookup's outcome back into the form.
///
/// A stale ticket leaves the state untouched. Otherwise the loading flag
/// drops and the list is filled, or on failure left empty with a
/// tier-specific error.
pub fn apply_lookup_result(
    mut state: FormState,
    ticket: LookupTicket,
    result: Result<LookupData, AppError>,
) -> FormState {
    if !state.is_current(ticket) {
        tracing::debug!(
            kind = ?ticket.kind,
            generation = ticket.generation,
            current = state.generations.get(ticket.kind),
            "Discarding stale lookup response"
        );
        return state;
    }

    match result {
        Ok(data) if data.kind() == ticket.kind => {
            state.options.fill(data);
        }
        Ok(data) => {
            tracing::error!(expected = ?ticket.kind, got = ?data.kind(), "Lookup answered with the wrong list");
            state.options.clear(ticket.kind);
            state.error = Some(ticket.kind.failure_message().to_string());
        }
        Err(e) => {
            tracing::error!(kind = ?ticket.kind, error = %e, "Lookup failed");
            state.options.clear(ticket.kind);
            state.error = Some(ticket.kind.failure_message().to_string());
        }
    }
    state.loading.set(ticket.kind, false);
    state
}

/// Clear the lookup error banner.
pub fn dismiss_error(mut state: FormState) -> FormState {
    state.error = None;
    state
}

// ── Validation ──────────────────────────────────────────────────────

/// Turn a selection into a request, or explain per field why not.
///
/// `today` bounds the date from above.
pub fn build_request(selection: &Selection, today: NaiveDate) -> Result<CauseListRequest, AppError> {
    let mut field_errors = HashMap::new();

    let required = [
        (Tier::State, "State is required"),
        (Tier::District, "District is required"),
        (Tier::CourtComplex, "Court Complex is required"),
        (Tier::Date, "Date is required"),
    ];
    for (tier, message) in required {
        if !selection.is_set(tier) {
            field_errors.insert(tier.field_name().to_string(), message.to_string());
        }
    }

    if !selection.date.trim().is_empty() {
        match NaiveDate::parse_from_str(selection.date.trim(), "%Y-%m-%d") {
            Ok(date) if date > today => {
                field_errors.insert(
                    Tier::Date.field_name().to_string(),
                    "Date cannot be in the future".to_string(),
                );
            }
            Ok(_) => {}
            Err(_) => {
                field_errors.insert(
                    Tier::Date.field_name().to_string(),
                    "Date must be in YYYY-MM-DD format".to_string(),
                );
            }
        }
    }

    if !field_errors.is_empty() {
        return Err(AppError::validation(
            "Please correct the highlighted fields",
            field_errors,
        ));
    }

    let court_name = Some(selection.court_name.trim())
        .filter(|n| !n.is_empty())
        .map(str::to_string);

    Ok(CauseListRequest {
        state: selection.state.clone(),
        district: selection.district.clone(),
        court_complex: selection.court_complex.clone(),
        court_name,
        date: selection.date.trim().to_string(),
        case_type: Some(selection.case_type),
    })
}
