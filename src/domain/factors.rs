//! Risk factor inputs for the NDLVC-5y model.
//!
//! Seven binary clinical findings, each weighted by a fixed coefficient
//! from the published Cox model.

use serde::{Deserialize, Serialize};

/// One of the seven binary predictors of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    /// Male sex
    Male,
    /// Left ventricular ejection fraction below 45%
    LvefLow,
    /// Non-sustained ventricular tachycardia
    Nsvt,
    /// Septal late gadolinium enhancement
    SeptalLge,
    /// Ring-like pattern of late gadolinium enhancement
    RingLge,
    /// Pathogenic/likely pathogenic variant in a high-risk gene
    PvsHr,
    /// Myocardial inflammation (EMB or T2-weighted CMR)
    Minfl,
}

impl RiskFactor {
    /// All factors, in form order.
    pub const ALL: [RiskFactor; 7] = [
        Self::Male,
        Self::LvefLow,
        Self::Nsvt,
        Self::SeptalLge,
        Self::RingLge,
        Self::PvsHr,
        Self::Minfl,
    ];

    /// Model coefficient (log hazard ratio).
    #[must_use]
    pub fn coefficient(&self) -> f64 {
        match self {
            Self::Male => 0.8605,
            Self::LvefLow => 1.6967,
            Self::Nsvt => 1.1288,
            Self::SeptalLge => 0.6929,
            Self::RingLge => 0.2275,
            Self::PvsHr => 1.5336,
            Self::Minfl => 2.7535,
        }
    }

    /// Full label shown next to the checkbox.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male sex",
            Self::LvefLow => "Left ventricular ejection fraction (LVEF) < 45%",
            Self::Nsvt => "Non-sustained ventricular tachycardia (NSVT)",
            Self::SeptalLge => "Septal late gadolinium enhancement (LGE)",
            Self::RingLge => "Ring-like pattern LGE",
            Self::PvsHr => {
                "Pathogenic/likely pathogenic variant in high-risk genes (LMNA, FLNC, TMEM43, PLN, DSP, RBM20)"
            }
            Self::Minfl => "Myocardial inflammation (by EMB or T2w CMR)",
        }
    }

    /// Short label for narrow layouts (at most 23 columns).
    #[must_use]
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Male => "Male sex",
            Self::LvefLow => "LVEF < 45%",
            Self::Nsvt => "NSVT",
            Self::SeptalLge => "Septal LGE",
            Self::RingLge => "Ring-like LGE",
            Self::PvsHr => "High-risk gene variant",
            Self::Minfl => "Myocardial inflammation",
        }
    }

    /// Machine key (matches the serialized name).
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::LvefLow => "lvef_low",
            Self::Nsvt => "nsvt",
            Self::SeptalLge => "septal_lge",
            Self::RingLge => "ring_lge",
            Self::PvsHr => "pvs_hr",
            Self::Minfl => "minfl",
        }
    }
}

/// The seven flags for one evaluation. All default to absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub male: bool,
    pub lvef_low: bool,
    pub nsvt: bool,
    pub septal_lge: bool,
    pub ring_lge: bool,
    pub pvs_hr: bool,
    pub minfl: bool,
}

impl RiskFactors {
    /// Every factor present.
    #[must_use]
    pub fn all() -> Self {
        Self {
            male: true,
            lvef_low: true,
            nsvt: true,
            septal_lge: true,
            ring_lge: true,
            pvs_hr: true,
            minfl: true,
        }
    }

    /// Build from a list of present factors.
    #[must_use]
    pub fn from_present(present: &[RiskFactor]) -> Self {
        let mut factors = Self::default();
        for &factor in present {
            factors.set(factor, true);
        }
        factors
    }

    /// Build from the low seven bits of `mask`, bit `i` mapping to `RiskFactor::ALL[i]`.
    #[must_use]
    pub fn from_bits(mask: u8) -> Self {
        let mut factors = Self::default();
        for (i, factor) in RiskFactor::ALL.iter().enumerate() {
            factors.set(*factor, mask & (1 << i) != 0);
        }
        factors
    }

    #[must_use]
    pub fn get(&self, factor: RiskFactor) -> bool {
        match factor {
            RiskFactor::Male => self.male,
            RiskFactor::LvefLow => self.lvef_low,
            RiskFactor::Nsvt => self.nsvt,
            RiskFactor::SeptalLge => self.septal_lge,
            RiskFactor::RingLge => self.ring_lge,
            RiskFactor::PvsHr => self.pvs_hr,
            RiskFactor::Minfl => self.minfl,
        }
    }

    pub fn set(&mut self, factor: RiskFactor, present: bool) {
        let slot = match factor {
            RiskFactor::Male => &mut self.male,
            RiskFactor::LvefLow => &mut self.lvef_low,
            RiskFactor::Nsvt => &mut self.nsvt,
            RiskFactor::SeptalLge => &mut self.septal_lge,
            RiskFactor::RingLge => &mut self.ring_lge,
            RiskFactor::PvsHr => &mut self.pvs_hr,
            RiskFactor::Minfl => &mut self.minfl,
        };
        *slot = present;
    }

    /// Flip one factor, returning its new state.
    pub fn toggle(&mut self, factor: RiskFactor) -> bool {
        let next = !self.get(factor);
        self.set(factor, next);
        next
    }

    /// Factors currently present, in form order.
    pub fn present(&self) -> impl Iterator<Item = RiskFactor> + '_ {
        RiskFactor::ALL.into_iter().filter(|f| self.get(*f))
    }

    /// Number of factors present.
    #[must_use]
    pub fn count(&self) -> usize {
        self.present().count()
    }
}
