//! Mock ticket data shown in the prototype

use folio_core::Item;

fn item(
    id: &str,
    title: &str,
    date: &str,
    time: &str,
    venue: &str,
    seats: &str,
    image_ref: &str,
) -> Item {
    Item {
        id: id.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        venue: venue.to_string(),
        seats: seats.to_string(),
        image_ref: image_ref.to_string(),
    }
}

/// Tickets listed on the first screen of the mini-app
pub fn sample_items() -> Vec<Item> {
    vec![
        item(
            "1",
            "The Nutcracker",
            "Sat 14 Dec",
            "19:30",
            "Main Stage",
            "Row F, Seats 12-13",
            "/public/tickets/nutcracker.jpg",
        ),
        item(
            "2",
            "Swan Lake",
            "Fri 10 Jan",
            "19:00",
            "Main Stage",
            "Row C, Seat 4",
            "/public/tickets/swan-lake.jpg",
        ),
        item(
            "3",
            "Giselle",
            "Sun 02 Feb",
            "14:00",
            "Studio Theatre",
            "Row A, Seats 7-8",
            "/public/tickets/giselle.jpg",
        ),
        item(
            "4",
            "La Bayad\u{e8}re",
            "Thu 13 Mar",
            "20:00",
            "Main Stage",
            "Balcony, Seat 21",
            "/public/tickets/la-bayadere.jpg",
        ),
    ]
}

/// Look up a ticket by id
pub fn find_item(id: &str) -> Option<Item> {
    sample_items().into_iter().find(|item| item.id == id)
}
