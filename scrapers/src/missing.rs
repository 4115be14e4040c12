//! Representatives whose portraits are absent from the `unitedstates` mirror.
//!
//! Members seated in the 119th Congress; the static-list fetcher recovers
//! them from the Bioguide instead.

use crate::portraits::PortraitTarget;

/// `(bioguide id, display name)` in fetch order.
pub const MISSING_REPRESENTATIVES: &[(&str, &str)] = &[
    ("V000137", "Beth Van Duyne"),
    ("L000596", "Anna Paulina Luna"),
    ("M001217", "Jared Moskowitz"),
    ("J000309", "Jonathan L. Jackson"),
    ("J000307", "John James"),
    ("L000598", "Michael Lawler"),
    ("L000601", "Greg Landsman"),
    ("M001219", "Max L. Miller"),
    ("L000602", "Summer L. Lee"),
    ("K000403", "Timothy M. Kennedy"),
    ("F000480", "Vince Fong"),
    ("R000620", "Michael A. Rulli"),
    ("M001235", "LaMonica McIver"),
    ("W000829", "Tony Wied"),
    ("F000481", "Cleo Fields"),
    ("B001326", "Nicholas J. Begich III"),
    ("F000479", "Shomari Figures"),
    ("A000381", "Yassamin Ansari"),
    ("H001099", "Abraham J. Hamadeh"),
    ("S001231", "Lateefah Simon"),
    ("G000585", "Adam Gray"),
    ("L000604", "Sam T. Liccardo"),
    ("W000828", "George Whitesides"),
    ("R000621", "Luz M. Rivas"),
    ("F000482", "Laura Friedman"),
    ("T000491", "Derek Tran"),
    ("M001234", "Dave Min"),
    ("H001101", "Jeff Hurd"),
    ("C001138", "Jeff Crank"),
    ("E000301", "Gabe Evans"),
    ("M001230", "Sarah McBride"),
    ("H001103", "Mike Haridopolos"),
    ("J000311", "Brian Jack"),
    ("S001233", "Jefferson Shreve"),
    ("M001232", "Mark B. Messmer"),
    ("S001234", "Derek Schmidt"),
    ("O000176", "Johnny Olszewski, Jr."),
    ("E000302", "Sarah Elfreth"),
    ("D000636", "April McClain Delaney"),
    ("B001327", "Tom Barrett"),
    ("M001236", "Kristen McDonald Rivet"),
    ("M001233", "Kelly Morrison"),
    ("B001328", "Wesley Bell"),
    ("O000177", "Robert F. Onder, Jr."),
    ("K000404", "Kimberlyn King-Hinds"),
    ("D000637", "Troy Downing"),
    ("M001237", "Addison P. McDowell"),
    ("H001105", "Mark Harris"),
    ("H001106", "Pat Harrigan"),
    ("K000405", "Brad Knott"),
    ("M001238", "Tim Moore"),
    ("F000483", "Julie Fedorchak"),
    ("G000603", "Maggie Goodlander"),
    ("C001139", "Herbert C. Conaway, Jr."),
    ("P000621", "Nellie Pou"),
    ("G000604", "Laura Gillen"),
    ("L000605", "George Latimer"),
    ("R000622", "Josh Riley"),
    ("M001239", "John W. Mannion"),
    ("T000492", "David J. Taylor"),
    ("D000638", "Maxine Dexter"),
    ("B001329", "Janelle S. Bynum"),
    ("M001240", "Ryan Mackenzie"),
    ("B001330", "Robert P. Bresnahan, Jr."),
    ("H001107", "Pablo José Hernández"),
    ("G000605", "Craig A. Goldman"),
    ("G000606", "Brandon Gill"),
    ("J000313", "Julie Johnson"),
    ("K000406", "Mike Kennedy"),
    ("M001241", "John J. McGuire III"),
    ("V000138", "Eugene Simon Vindman"),
    ("S001235", "Suhas Subramanyam"),
    ("B001331", "Michael Baumgartner"),
    ("R000623", "Emily Randall"),
    ("M001242", "Riley M. Moore"),
];

/// The embedded list as batch targets.
#[must_use]
pub fn missing_targets() -> Vec<PortraitTarget> {
    MISSING_REPRESENTATIVES
        .iter()
        .map(|(id, name)| PortraitTarget::new(*id, *name))
        .collect()
}
