use csv::StringRecord;

/// The canonical measurement fields the summary is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TempC,
    PermeateFlow,
    FeedPressure,
    PermPressure,
    FeedConductivity,
    PermConductivity,
    DifferentialPressure,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::TempC,
        Field::PermeateFlow,
        Field::FeedPressure,
        Field::PermPressure,
        Field::FeedConductivity,
        Field::PermConductivity,
        Field::DifferentialPressure,
    ];

    /// Recognized header spellings, highest priority first. Matching is
    /// case-insensitive but otherwise exact.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Field::TempC => &["T_C", "t_C", "Temp", "Temperature"],
            Field::PermeateFlow => &["Qp_m3h", "Qp"],
            Field::FeedPressure => &["P_feed_bar", "Pfeed_bar", "P_feed"],
            Field::PermPressure => &["P_perm_bar", "Pperm_bar", "P_perm"],
            Field::FeedConductivity => &["Cond_feed_mgL", "Cf", "CondFeed"],
            Field::PermConductivity => &["Cond_perm_mgL", "Cp", "CondPerm"],
            Field::DifferentialPressure => &["dP_bar", "dP", "DeltaP"],
        }
    }

    pub fn canonical_name(&self) -> &'static str {
        match self {
            Field::TempC => "T_C",
            Field::PermeateFlow => "Qp",
            Field::FeedPressure => "P_feed",
            Field::PermPressure => "P_perm",
            Field::FeedConductivity => "Cond_feed",
            Field::PermConductivity => "Cond_perm",
            Field::DifferentialPressure => "dP",
        }
    }
}

/// Column index for each canonical field, resolved once per table and
/// reused for every row. A field left unresolved here stays absent for the
/// whole table.
#[derive(Debug, Clone, Default)]
pub struct ResolvedColumns {
    indices: [Option<usize>; 7],
}

impl ResolvedColumns {
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut indices = [None; 7];
        for (slot, field) in indices.iter_mut().zip(Field::ALL) {
            *slot = resolve_field(field, headers);
        }
        Self { indices }
    }

    pub fn index_of(&self, field: Field) -> Option<usize> {
        self.indices[field as usize]
    }

    pub fn unresolved(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.index_of(*field).is_none())
            .collect()
    }
}

fn resolve_field(field: Field, headers: &StringRecord) -> Option<usize> {
    field.aliases().iter().find_map(|alias| {
        headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(alias))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> StringRecord {
        StringRecord::from(names.to_vec())
    }

    #[test]
    fn resolves_case_insensitively() {
        let resolved = ResolvedColumns::from_headers(&headers(&["temp", "QP_M3H", "deltap"]));
        assert_eq!(resolved.index_of(Field::TempC), Some(0));
        assert_eq!(resolved.index_of(Field::PermeateFlow), Some(1));
        assert_eq!(resolved.index_of(Field::DifferentialPressure), Some(2));
    }

    #[test]
    fn earlier_alias_wins_over_header_order() {
        // "T_C" outranks "Temperature" even though it appears later.
        let resolved = ResolvedColumns::from_headers(&headers(&["Temperature", "T_C"]));
        assert_eq!(resolved.index_of(Field::TempC), Some(1));
    }

    #[test]
    fn headers_are_trimmed_before_matching() {
        let resolved = ResolvedColumns::from_headers(&headers(&[" Qp ", "P_feed_bar "]));
        assert_eq!(resolved.index_of(Field::PermeateFlow), Some(0));
        assert_eq!(resolved.index_of(Field::FeedPressure), Some(1));
    }

    #[test]
    fn unresolved_fields_are_reported() {
        let resolved = ResolvedColumns::from_headers(&headers(&["T_C", "Qp"]));
        assert_eq!(resolved.index_of(Field::FeedPressure), None);
        let unresolved = resolved.unresolved();
        assert_eq!(unresolved.len(), 5);
        assert!(unresolved.contains(&Field::FeedConductivity));
        assert!(!unresolved.contains(&Field::TempC));
    }
}
