//! Lineage parsing and rank tagging for taxonomy-headed FASTA records

/// Rank tags applied by position, kingdom first
pub const RANK_PREFIXES: [&str; 7] = ["k__", "p__", "c__", "o__", "f__", "g__", "s__"];

/// The seven ranks a lineage position can be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaxonomicRank {
    Kingdom,
    Phylum,
    Class,
    Order,
    Family,
    Genus,
    Species,
}

impl TaxonomicRank {
    pub const ALL: [TaxonomicRank; 7] = [
        Self::Kingdom,
        Self::Phylum,
        Self::Class,
        Self::Order,
        Self::Family,
        Self::Genus,
        Self::Species,
    ];

    /// Rank for a 0-indexed lineage position; `None` past species
    pub fn at_depth(depth: usize) -> Option<Self> {
        Self::ALL.get(depth).copied()
    }

    pub fn depth(&self) -> usize {
        match self {
            Self::Kingdom => 0,
            Self::Phylum => 1,
            Self::Class => 2,
            Self::Order => 3,
            Self::Family => 4,
            Self::Genus => 5,
            Self::Species => 6,
        }
    }

    pub fn prefix(&self) -> &'static str {
        RANK_PREFIXES[self.depth()]
    }
}

/// Split a `;`-delimited lineage into trimmed, non-empty taxa.
///
/// Empty entries (`a;;b`, trailing `;`, whitespace-only) are dropped, so
/// rank positions compress over them.
pub fn parse_lineage(lineage: &str) -> Vec<&str> {
    lineage
        .split(';')
        .map(str::trim)
        .filter(|taxon| !taxon.is_empty())
        .collect()
}

/// Tag each taxon with the rank prefix for its position and join with `;`.
///
/// Taxa deeper than species are kept as-is. Existing tags are not
/// inspected: `d__Bacteria` at position 0 becomes `k__d__Bacteria`.
pub fn format_taxonomy(taxa: &[&str]) -> String {
    let mut out = String::new();
    for (i, taxon) in taxa.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        if let Some(rank) = TaxonomicRank::at_depth(i) {
            out.push_str(rank.prefix());
        }
        out.push_str(taxon);
    }
    out
}
