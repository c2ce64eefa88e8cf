//! The Deeply Dippy screen: one column of greetings, each padded by a different
//! dip expression.

use dippy_ui::{Column, ColumnSpec, Dip, DipExt, DpExt, Modifier, Text};

pub fn DeeplyDippy() {
    Column(Modifier::empty().padding(4.dip()), ColumnSpec::default(), || {
        Text("Hello World 01", Modifier::empty().padding(16.dip()));
        Text("Hello World 02", Modifier::empty().padding(16.dip() + 8.dp()));
        Text("Hello World 03", Modifier::empty().padding(16.dip() * 2));
        Text("Hello World 04", Modifier::empty().padding(Dip(16.0) + 8.dip()));
        Text("Hello World 05", Modifier::empty().padding(Dip(16.0) + Dip(8.0)));
        Text(
            "Hello World 06",
            Modifier::empty().padding(Dip(16.0) + (Dip(8.0) + 4.dip())),
        );
        Text("Hello World 07", Modifier::empty().padding(3 * 2.dip()));
        Text(
            "Hello World 08",
            Modifier::empty().padding(Dip(3.0).take_or_else(|| 3.dp())),
        );
        Text(
            "Hello World 09",
            Modifier::empty().padding((Dip(3.0).compare_to(Dip(1.0)) as i32).dip()),
        );
        Text("Hello World 10", Modifier::empty().padding(Dip::HAIRLINE));
        Text(
            "Hello World 11",
            Modifier::empty().padding(Dip(3.0).coerce_in(Dip(1.0), Dip(3.0))),
        );
    });
}
