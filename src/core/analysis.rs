//! Interpretation tables keyed by `Digit`
//!
//! Four sections per result, in order: main personality (O), subconscious
//! code, inner code, outer code. Values with no table entry (0, or an outer
//! code other than 3/6/9) get `NO_INTERPRETATION`.

use crate::types::{Analysis, AnalysisSection, Digit, SectionKind, TriangleResult};

/// Default text for values without a table entry
pub const NO_INTERPRETATION: &str = "No interpretation available for this value.";

const MAIN_SUMMARY: &str = "The main personality carries about 60% of a person's character: \
     the side most often shown to others in daily life.";
const SUBCONSCIOUS_SUMMARY: &str = "The subconscious code stands for instinctive reactions and \
     deep motives, traits a person is often not aware of.";
const INNER_SUMMARY: &str =
    "The inner code stands for feelings and needs kept deep inside and rarely shown to others.";
const OUTER_SUMMARY: &str = "The outer code stands for a person's values.";

/// Main personality text, also used for the subconscious code
pub fn main_personality(value: u32) -> &'static str {
    let Some(digit) = Digit::from_value(value) else {
        return NO_INTERPRETATION;
    };
    match digit {
        Digit::One => "1 stands for beginnings and independence: a natural leader who acts, \
            prefers to decide alone and suits pioneering work. Watch for stubbornness and \
            self-centredness; learning to cooperate makes the strength last.",
        Digit::Two => "2 values relationships and emotional bonds: sensitive, a good listener \
            and the glue of a team. Watch for hesitation and people-pleasing; boundaries and \
            confidence are the path to growth.",
        Digit::Three => "3 stands for creativity, expression and joy: optimistic, talented with \
            words, art and people, and in need of novelty. Watch for mood swings and short-lived \
            enthusiasm; focus lets the talent take root.",
        Digit::Four => "4 values order, responsibility and stability: a down-to-earth doer who \
            plans well and endures. Needs security. Watch for rigidity; accepting change makes \
            life's structure more flexible.",
        Digit::Five => "5 stands for freedom and change: loves new experiences, dislikes \
            constraint and adapts quickly. Watch for impulsiveness and distraction; discipline \
            within freedom turns experience into wisdom.",
        Digit::Six => "6 values love, responsibility and family: cares for others and seeks \
            harmony, suited to service, teaching or healing. Watch for over-giving and control; \
            caring for oneself first keeps relationships balanced.",
        Digit::Seven => "7 stands for introspection and wisdom: drawn to meaning, knowledge and \
            the spiritual, and needs time alone. Watch for drifting away from reality; grounding \
            insight in daily life makes for deep influence.",
        Digit::Eight => "8 stands for power, material success and achievement: a capable manager \
            with practical judgment who values results. Watch for chasing control and outcomes; \
            balancing inner and outer worth steadies the power.",
        Digit::Nine => "9 stands for universal love and completion: empathetic and idealistic, \
            concerned with society as a whole and eager to bring change. Watch for emotional \
            exhaustion and self-sacrifice; letting go and setting limits is the path to maturity.",
    }
}

/// Subconscious code text (shares the main personality table)
pub fn subconscious(value: u32) -> &'static str {
    main_personality(value)
}

/// Inner code text
pub fn inner_code_text(value: u32) -> &'static str {
    let Some(digit) = Digit::from_value(value) else {
        return NO_INTERPRETATION;
    };
    match digit {
        Digit::One => "Inner code 1: confident, independent and creative inside, but tends to \
            see things only from its own angle and resists advice, which can come across as \
            forceful or stubborn.",
        Digit::Two => "Inner code 2: looks independent and opinionated, yet longs for support \
            and company; big decisions bring doubt, second-guessing and waiting for approval.",
        Digit::Three => "Inner code 3: full of the urge to express and connect, easily restless, \
            releases feelings through socialising and sharing, but short on patience and \
            changeable.",
        Digit::Four => "Inner code 4: needs security and stability, eases anxiety through \
            analysis and planning; writing or making a plan in turbulent times brings out a \
            good expressive ability.",
        Digit::Five => "Inner code 5: yearns for freedom and variety, with broad interests and a \
            love of fun; firm principles can make it seem hard to reach, but it is flexible as \
            long as its limits are respected.",
        Digit::Six => "Inner code 6: visionary and idealistic; acts fast on the surface, \
            sometimes hastily, but holds high standards for quality and results and is sensitive \
            to beauty and abundance.",
        Digit::Seven => "Inner code 7: willing to accommodate others while appearing rational \
            and calm; has a strong inner sense of justice and quietly keeps important people \
            and things at heart.",
        Digit::Eight => "Inner code 8: torn between following the rules and chasing achievement; \
            sets grand goals, carries the pressure that comes with them and keeps pushing \
            toward them in practice.",
        Digit::Nine => "Inner code 9: curious about and hungry for the world, rich in interests \
            and ideas, can seem driven by desire, yet grateful at heart and quick to care for \
            and help others.",
    }
}

/// Outer code text; only 3, 6 and 9 have entries
pub fn outer_code_text(value: u32) -> &'static str {
    match Digit::from_value(value) {
        Some(Digit::Three) => "Outer code 3: judges by emotion and atmosphere, with an \
            idealistic streak.",
        Some(Digit::Six) => "Outer code 6: values concrete results and leans toward realism.",
        Some(Digit::Nine) => "Outer code 9: highly sensitive to information, language and the \
            wider context, with a visionary outlook.",
        _ => NO_INTERPRETATION,
    }
}

fn section(kind: SectionKind, code: u32, summary: &'static str, text: &'static str) -> AnalysisSection {
    AnalysisSection {
        kind,
        title: kind.title(),
        code,
        summary,
        text,
    }
}

/// Build the four interpretation sections for a result
pub fn analyze(result: &TriangleResult) -> Analysis {
    let main = result.main_code();
    let core = &result.core;

    Analysis {
        sections: vec![
            section(SectionKind::MainPersonality, main, MAIN_SUMMARY, main_personality(main)),
            section(
                SectionKind::Subconscious,
                core.subconscious_code,
                SUBCONSCIOUS_SUMMARY,
                subconscious(core.subconscious_code),
            ),
            section(
                SectionKind::InnerCode,
                core.inner_code,
                INNER_SUMMARY,
                inner_code_text(core.inner_code),
            ),
            section(
                SectionKind::OuterCode,
                core.outer_code,
                OUTER_SUMMARY,
                outer_code_text(core.outer_code),
            ),
        ],
    }
}
