//! Built-in Delhi waste-collection catalog.
//!
//! Eleven points with the Municipal Corporation office ("DMC") as depot.
//! Road distances are in kilometres and symmetric.

use crate::models::{Coordinates, Point};

/// Name of the depot.
pub const DELHI_DEPOT: &str = "DMC";

const POINTS: [(u32, &str, f64, f64); 11] = [
    (1, "Connaught Place", 28.6315, 77.2167),
    (2, "India Gate", 28.6129, 77.2295),
    (3, "Lodi Gardens", 28.5931, 77.2197),
    (4, "Karol Bagh", 28.6519, 77.1909),
    (5, "Chandni Chowk", 28.6506, 77.2303),
    (6, "Hauz Khas", 28.5494, 77.2001),
    (7, "Jantar Mantar", 28.6271, 77.2166),
    (8, "Red Fort", 28.6562, 77.2410),
    (9, "Qutub Minar", 28.5245, 77.1855),
    (10, "Akshardham Temple", 28.6127, 77.2773),
    (11, "DMC", 28.6418, 77.2274),
];

pub(super) const ROAD_KM: [(&str, &str, f64); 55] = [
    ("Connaught Place", "India Gate", 2.5),
    ("Connaught Place", "Lodi Gardens", 5.0),
    ("Connaught Place", "Karol Bagh", 4.0),
    ("Connaught Place", "Chandni Chowk", 4.5),
    ("Connaught Place", "Hauz Khas", 8.0),
    ("Connaught Place", "Jantar Mantar", 1.2),
    ("Connaught Place", "Red Fort", 5.5),
    ("Connaught Place", "Qutub Minar", 12.0),
    ("Connaught Place", "Akshardham Temple", 9.0),
    ("Connaught Place", "DMC", 0.5),
    ("India Gate", "Lodi Gardens", 3.5),
    ("India Gate", "Karol Bagh", 5.0),
    ("India Gate", "Chandni Chowk", 4.0),
    ("India Gate", "Hauz Khas", 10.0),
    ("India Gate", "Jantar Mantar", 1.8),
    ("India Gate", "Red Fort", 5.2),
    ("India Gate", "Qutub Minar", 13.0),
    ("India Gate", "Akshardham Temple", 8.5),
    ("India Gate", "DMC", 1.0),
    ("Lodi Gardens", "Karol Bagh", 7.0),
    ("Lodi Gardens", "Chandni Chowk", 6.0),
    ("Lodi Gardens", "Hauz Khas", 6.0),
    ("Lodi Gardens", "Jantar Mantar", 4.0),
    ("Lodi Gardens", "Red Fort", 8.0),
    ("Lodi Gardens", "Qutub Minar", 9.0),
    ("Lodi Gardens", "Akshardham Temple", 10.0),
    ("Lodi Gardens", "DMC", 7.5),
    ("Karol Bagh", "Chandni Chowk", 6.5),
    ("Karol Bagh", "Hauz Khas", 11.0),
    ("Karol Bagh", "Jantar Mantar", 3.5),
    ("Karol Bagh", "Red Fort", 6.5),
    ("Karol Bagh", "Qutub Minar", 12.5),
    ("Karol Bagh", "Akshardham Temple", 10.5),
    ("Karol Bagh", "DMC", 4.0),
    ("Chandni Chowk", "Hauz Khas", 12.0),
    ("Chandni Chowk", "Jantar Mantar", 3.0),
    ("Chandni Chowk", "Red Fort", 3.5),
    ("Chandni Chowk", "Qutub Minar", 13.5),
    ("Chandni Chowk", "Akshardham Temple", 9.5),
    ("Chandni Chowk", "DMC", 3.5),
    ("Hauz Khas", "Jantar Mantar", 8.5),
    ("Hauz Khas", "Red Fort", 15.0),
    ("Hauz Khas", "Qutub Minar", 8.0),
    ("Hauz Khas", "Akshardham Temple", 14.0),
    ("Hauz Khas", "DMC", 10.0),
    ("Jantar Mantar", "Red Fort", 4.5),
    ("Jantar Mantar", "Qutub Minar", 11.0),
    ("Jantar Mantar", "Akshardham Temple", 7.5),
    ("Jantar Mantar", "DMC", 1.5),
    ("Red Fort", "Qutub Minar", 14.0),
    ("Red Fort", "Akshardham Temple", 10.0),
    ("Red Fort", "DMC", 5.0),
    ("Qutub Minar", "Akshardham Temple", 8.0),
    ("Qutub Minar", "DMC", 10.0),
    ("Akshardham Temple", "DMC", 9.0),
];

pub(super) fn points() -> Vec<Point> {
    POINTS
        .iter()
        .map(|&(id, name, lat, lon)| Point::new(id, name, Coordinates::new(lat, lon)))
        .collect()
}
