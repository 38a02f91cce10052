//! Image Collections - 静态图库表
//!
//! 每个分类固定 5 张 Unsplash 图片，启动后只读

use super::ImageCategory;

/// 任何分类都取不到图时的兜底图片
pub const FALLBACK_IMAGE_URL: &str = "https://images.unsplash.com/photo-1490730141103-6cac27016106";

const ROBOT: &[&str] = &[
    "https://images.unsplash.com/photo-1485827404703-89b55fcc595e",
    "https://images.unsplash.com/photo-1535378917042-10a22c95931a",
    "https://images.unsplash.com/photo-1531746790731-6bf18d3c3f2b",
    "https://images.unsplash.com/photo-1485827404703-89b55fcc595e",
    "https://images.unsplash.com/photo-1507146153580-69a1fe6d8aa1",
];

const DOOR: &[&str] = &[
    "https://images.unsplash.com/photo-1509205477838-a534e43a849f",
    "https://images.unsplash.com/photo-1527689368864-3a821dbccc34",
    "https://images.unsplash.com/photo-1528696892704-5e1122852276",
    "https://images.unsplash.com/photo-1572883454114-1cf0031ede2a",
    "https://images.unsplash.com/photo-1518972559570-7cc1309f3229",
];

const ADVENTURE: &[&str] = &[
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4",
    "https://images.unsplash.com/photo-1472145246862-b24cf25c4a36",
    "https://images.unsplash.com/photo-1513542789411-b6a5d4f31634",
    "https://images.unsplash.com/photo-1518709268805-4e9042af2176",
    "https://images.unsplash.com/photo-1510279770292-4b34de9f5c23",
];

const SCIFI: &[&str] = &[
    "https://images.unsplash.com/photo-1446776811953-b23d57bd21aa",
    "https://images.unsplash.com/photo-1451187580459-43490279c0fa",
    "https://images.unsplash.com/photo-1534996858221-380b92700493",
    "https://images.unsplash.com/photo-1517976547714-720226b864c1",
    "https://images.unsplash.com/photo-1516192518150-0d8fee5425e3",
];

const MYSTERY: &[&str] = &[
    "https://images.unsplash.com/photo-1519822472072-ec86d5ab6f5c",
    "https://images.unsplash.com/photo-1509205477838-a534e43a849f",
    "https://images.unsplash.com/photo-1503708928676-1cb796a0891e",
    "https://images.unsplash.com/photo-1547483029-77784da27709",
    "https://images.unsplash.com/photo-1504851149312-7a075b496cc7",
];

const ROMANCE: &[&str] = &[
    "https://images.unsplash.com/photo-1499198116522-4a6235013d63",
    "https://images.unsplash.com/photo-1518199266791-5375a83190b7",
    "https://images.unsplash.com/photo-1503614472-8c93d56e92ce",
    "https://images.unsplash.com/photo-1511632765486-a01980e01a18",
    "https://images.unsplash.com/photo-1518895949257-7621c3c786d7",
];

const HORROR: &[&str] = &[
    "https://images.unsplash.com/photo-1509248961158-e54f6934749c",
    "https://images.unsplash.com/photo-1502136969935-8d8eef54d77b",
    "https://images.unsplash.com/photo-1533749871411-5e21e14bcc7d",
    "https://images.unsplash.com/photo-1503708928676-1cb796a0891e",
    "https://images.unsplash.com/photo-1518709268805-4e9042af2176",
];

const NATURE: &[&str] = &[
    "https://images.unsplash.com/photo-1441974231531-c6227db76b6e",
    "https://images.unsplash.com/photo-1507525428034-b723cf961d3e",
    "https://images.unsplash.com/photo-1465146344425-f00d5f5c8f07",
    "https://images.unsplash.com/photo-1472214103451-9374bd1c798e",
    "https://images.unsplash.com/photo-1469474968028-56623f02e42e",
];

const DEFAULT: &[&str] = &[
    "https://images.unsplash.com/photo-1490730141103-6cac27016106",
    "https://images.unsplash.com/photo-1501854140801-50d01698950b",
    "https://images.unsplash.com/photo-1518895949257-7621c3c786d7",
    "https://images.unsplash.com/photo-1488190211105-8b0e65b80b4e",
    "https://images.unsplash.com/photo-1507208773393-40d9fc670acf",
];

/// 分类 → 图片 URL 列表
pub fn collection(category: ImageCategory) -> &'static [&'static str] {
    match category {
        ImageCategory::Robot => ROBOT,
        ImageCategory::Door => DOOR,
        ImageCategory::Adventure => ADVENTURE,
        ImageCategory::Scifi => SCIFI,
        ImageCategory::Mystery => MYSTERY,
        ImageCategory::Romance => ROMANCE,
        ImageCategory::Horror => HORROR,
        ImageCategory::Nature => NATURE,
        ImageCategory::Default => DEFAULT,
    }
}

/// 整张表的所有 URL
#[cfg(test)]
pub(crate) fn all_urls() -> impl Iterator<Item = &'static str> {
    ImageCategory::ALL
        .into_iter()
        .flat_map(|category| collection(category).iter().copied())
}
