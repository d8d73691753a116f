//! Canned catalog responses for tests
//!
//! Shaped after real BoardGameGeek XML API 2 payloads, trimmed to the fields
//! the normalizer reads plus a little noise it must ignore.

#![allow(dead_code)]

/// Three hits: two base games and one expansion.
pub const SEARCH_CATAN: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<items total="3" termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
    <item type="boardgame" id="13">
        <name type="primary" value="Catan"/>
        <yearpublished value="1995" />
    </item>
    <item type="boardgameexpansion" id="926">
        <name type="primary" value="Catan: Cities &amp; Knights"/>
        <yearpublished value="1998" />
    </item>
    <item type="boardgame" id="278">
        <name type="primary" value="Catan: Junior"/>
        <yearpublished value="2007" />
    </item>
</items>"#;

/// Exactly one hit, which the tree reader emits as a bare object.
pub const SEARCH_SINGLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<items total="1" termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
    <item type="boardgame" id="822">
        <name type="primary" value="Carcassonne"/>
        <yearpublished value="2000" />
    </item>
</items>"#;

pub const SEARCH_EMPTY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<items total="0" termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
</items>"#;

/// Full thing response with stats enabled.
pub const THING_CATAN: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<items termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
    <item type="boardgame" id="13">
        <thumbnail>https://cf.example/catan_t.jpg</thumbnail>
        <image>https://cf.example/catan.jpg</image>
        <name type="alternate" sortindex="1" value="Die Siedler von Catan" />
        <name type="primary" sortindex="1" value="Catan" />
        <name type="alternate" sortindex="5" value="Les Colons de Catane" />
        <description>In Catan, players try to be the dominant force on the island of Catan.&#10;&#10;Trade and build.</description>
        <yearpublished value="1995" />
        <minplayers value="3" />
        <maxplayers value="4" />
        <playingtime value="120" />
        <minplaytime value="60" />
        <maxplaytime value="120" />
        <minage value="10" />
        <link type="boardgamecategory" id="1021" value="Economic" />
        <link type="boardgamemechanic" id="2072" value="Dice Rolling" />
        <statistics page="1">
            <ratings>
                <usersrated value="123456" />
                <average value="7.1" />
                <ranks>
                    <rank type="subtype" id="1" name="boardgame" friendlyname="Board Game Rank" value="512" bayesaverage="6.9" />
                </ranks>
                <averageweight value="2.2964" />
            </ratings>
        </statistics>
    </item>
</items>"#;

/// Item carrying only an id and a single name.
pub const THING_SPARSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<items termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
    <item type="boardgame" id="4242">
        <name type="primary" sortindex="1" value="Sparse Game" />
    </item>
</items>"#;

/// What the thing endpoint returns for an unknown id.
pub const THING_NOT_FOUND: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<items termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
</items>"#;

pub const ERROR_DOCUMENT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<errors><error><message>Rate limit exceeded.</message></error></errors>"#;
