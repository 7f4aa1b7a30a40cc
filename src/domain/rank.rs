/// Lounge rank tiers that have an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankTier {
    Gold,
    Platinum,
    Sapphire,
    Ruby,
    Diamond,
    Master,
    GrandMaster,
}

impl RankTier {
    /// Case-insensitive; returns None for tiers without an icon (e.g. "Bronze").
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "gold" => Some(RankTier::Gold),
            "platinum" => Some(RankTier::Platinum),
            "sapphire" => Some(RankTier::Sapphire),
            "ruby" => Some(RankTier::Ruby),
            "diamond" => Some(RankTier::Diamond),
            "master" => Some(RankTier::Master),
            "grand master" | "grandmaster" => Some(RankTier::GrandMaster),
            _ => None,
        }
    }

    pub fn icon_url(&self) -> &'static str {
        match self {
            RankTier::Gold => "/images/gold.png",
            RankTier::Platinum => "/images/platinum.png",
            RankTier::Sapphire => "/images/sapphire.png",
            RankTier::Ruby => "/images/ruby.png",
            RankTier::Diamond => "/images/diamond.png",
            RankTier::Master => "/images/master.png",
            RankTier::GrandMaster => "/images/grandmaster.png",
        }
    }
}

pub fn rank_icon_url(label: &str) -> Option<&'static str> {
    RankTier::from_label(label).map(|tier| tier.icon_url())
}
