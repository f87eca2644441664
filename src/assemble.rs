// src/assemble.rs
//! One parsed card page → one [`Card`].
//!
//! Classification runs once and decides which detail fields are read. Only
//! the card number can fail the card; everything else has a default.

use scraper::Html;

use crate::error::Result;
use crate::model::{Card, CardDetails};
use crate::specs::SiteStrategy;

pub fn assemble(doc: &Html, strategy: &SiteStrategy) -> Result<Card> {
    let class = (strategy.classify)(doc);
    let number = (strategy.number)(doc)?;

    let name = (strategy.name)(doc, class.is_pokemon);
    let hp = (strategy.hp)(doc);

    let details = if class.is_pokemon {
        CardDetails::pokemon(
            class.label,
            hp,
            (strategy.attacks)(doc),
            (strategy.weakness)(doc),
            (strategy.retreat_cost)(doc),
            (strategy.abilities)(doc),
        )
    } else {
        CardDetails::non_pokemon(class.label, hp, (strategy.effect)(doc))
    };

    logd!("Assembled #{number} {name} ({})", details.kind);

    Ok(Card {
        name,
        number,
        set: (strategy.set_name)(doc),
        pack: (strategy.pack)(doc),
        rate: (strategy.rate)(doc),
        details,
    })
}

/// Parse `html` and assemble it.
pub fn assemble_html(html: &str, strategy: &SiteStrategy) -> Result<Card> {
    let doc = Html::parse_document(html);
    assemble(&doc, strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScrapeError;
    use crate::specs::Site;

    const MINI_POKEMON: &str = r#"<html><head><title>Genetic Apex - #001 Bulbasaur - Serebii.net</title></head><body>
        <table><tr><td class="cardinfo"><table>
            <tr><td class="main"><b><font>Bulbasaur</font></b></td>
                <td align="center"><img src="/tcgpocket/image/grass.png"></td>
                <td align="right"><b>70 HP</b></td></tr>
            <tr><td><img alt="Grass"><img alt="Colorless"></td>
                <td><span class="main"><a href="/tcgpocket/attacks/vinewhip.shtml"><b>Vine Whip</b></a></span></td>
                <td><b>20</b></td></tr>
            <tr><td><b>Weakness</b></td><td><img src="/tcgpocket/image/fire.png"></td>
                <td><b>Retreat Cost</b></td><td><img src="/tcgpocket/image/colorless.png"></td></tr>
        </table></td></tr></table>
        <table><tr><td class="small" align="right">001&nbsp;/&nbsp;226<br><img src="/tcgpocket/image/diamond1.png"></td></tr></table>
    </body></html>"#;

    #[test]
    fn pokemon_details_only() {
        let card = assemble_html(MINI_POKEMON, &Site::Serebii.strategy()).unwrap();
        assert_eq!(card.name, "Bulbasaur");
        assert_eq!(card.number, 1);
        assert_eq!(card.set, "Genetic Apex");
        assert_eq!(card.pack, "Unknown");
        assert_eq!(card.rate.rarity, "1 Diamond");
        assert_eq!(card.details.kind, "grass");
        assert_eq!(card.details.hp, Some(70));
        assert_eq!(card.details.attacks().map(<[_]>::len), Some(1));
        assert_eq!(card.details.weakness(), Some("fire"));
        assert_eq!(card.details.retreat_cost(), Some(1));
        assert_eq!(card.details.abilities(), Some(&[][..]));
        assert_eq!(card.details.effect(), None);
    }

    #[test]
    fn unclassified_page_is_non_pokemon() {
        let html = r#"<table><tr><td class="small" align="right">5 / 20</td></tr></table>"#;
        let card = assemble_html(html, &Site::Serebii.strategy()).unwrap();
        assert_eq!(card.details.kind, "Unknown");
        assert_eq!(card.details.effect(), Some("No effect found"));
        assert!(card.details.attacks().is_none());
    }

    #[test]
    fn missing_number_fails_the_card() {
        let html = MINI_POKEMON.replace("001&nbsp;/&nbsp;226", "");
        let err = assemble_html(&html, &Site::Serebii.strategy()).unwrap_err();
        assert!(matches!(err, ScrapeError::MissingNumber));
    }
}
