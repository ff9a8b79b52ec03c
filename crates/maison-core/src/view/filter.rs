// Client-side search over already-loaded collections.
//
// Members and brands are small and fully loaded, so search is a
// case-insensitive substring match here. Perfume search normally goes
// to the server; `perfumes` exists for filtering the page in hand.

use maison_api::{Brand, Member, Perfume};

fn contains(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Match against name or email.
pub fn members(members: &[Member], query: &str) -> Vec<Member> {
    let needle = query.trim().to_lowercase();
    members
        .iter()
        .filter(|m| needle.is_empty() || contains(&m.name, &needle) || contains(&m.email, &needle))
        .cloned()
        .collect()
}

pub fn brands(brands: &[Brand], query: &str) -> Vec<Brand> {
    let needle = query.trim().to_lowercase();
    brands
        .iter()
        .filter(|b| needle.is_empty() || contains(&b.brand_name, &needle))
        .cloned()
        .collect()
}

/// Match against perfume name or brand name.
pub fn perfumes(perfumes: &[Perfume], query: &str) -> Vec<Perfume> {
    let needle = query.trim().to_lowercase();
    perfumes
        .iter()
        .filter(|p| {
            needle.is_empty()
                || contains(&p.perfume_name, &needle)
                || contains(&p.brand_name, &needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{brand, perfume};

    #[test]
    fn member_matches_name_or_email() {
        let list = vec![
            Member {
                id: "1".into(),
                name: "Ana Lima".into(),
                email: "ana@example.com".into(),
                year_of_birth: 1990,
                is_male: false,
                is_admin: false,
            },
            Member {
                id: "2".into(),
                name: "Bo".into(),
                email: "bo@SHOP.io".into(),
                year_of_birth: 1985,
                is_male: true,
                is_admin: false,
            },
        ];
        assert_eq!(members(&list, "LIMA").len(), 1);
        assert_eq!(members(&list, "shop")[0].id, "2");
        assert_eq!(members(&list, "").len(), 2);
        assert!(members(&list, "zed").is_empty());
    }

    #[test]
    fn brand_substring() {
        let list = vec![brand("b1", "Creed"), brand("b2", "Maison Francis Kurkdjian")];
        assert_eq!(brands(&list, "francis")[0].id, "b2");
    }

    #[test]
    fn perfume_matches_brand_too() {
        let mut other = perfume("p2");
        other.brand_name = "Byredo".into();
        let list = vec![perfume("p1"), other];
        assert_eq!(perfumes(&list, "byredo").len(), 1);
        assert_eq!(perfumes(&list, "perfume").len(), 2);
    }
}
