#[cfg(test)]
mod tests {
    use crate::collection::*;
    use crate::color::*;
    use crate::error::*;
    use crate::observable::*;
    use crate::set_property;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Probe {
        label: String,
        level: u8,
        observers: PropertyObservers<Self>,
    }

    impl ObservableState for Probe {
        fn observers(&self) -> &PropertyObservers<Self> {
            &self.observers
        }
        fn observers_mut(&mut self) -> &mut PropertyObservers<Self> {
            &mut self.observers
        }
    }

    fn record(p: &mut Probe) -> (SubscriptionId, Rc<RefCell<Vec<PropertyName>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let id = p.subscribe(move |_, prop| seen_clone.borrow_mut().push(prop));
        (id, seen)
    }

    #[test]
    fn test_equal_write_is_silent() {
        let mut p = Probe::default();
        let (_, seen) = record(&mut p);

        assert!(!set_property!(&mut p, level, 0));
        assert!(!set_property!(&mut p, label, String::new()));
        assert!(seen.borrow().is_empty());

        assert!(set_property!(&mut p, level, 4));
        assert!(!set_property!(&mut p, level, 4));
        assert_eq!(*seen.borrow(), vec!["level"]);
        assert_eq!(p.level, 4);
    }

    #[test]
    fn test_set_field_with_explicit_name() {
        let mut p = Probe::default();
        let (_, seen) = record(&mut p);

        assert!(p.set_field(|s| &mut s.label, "x".to_string(), "caption"));
        assert_eq!(p.label, "x");
        assert_eq!(*seen.borrow(), vec!["caption"]);
    }

    #[test]
    fn test_notify_is_unconditional() {
        let p = &mut Probe::default();
        let (_, seen) = record(p);
        p.notify("derived");
        p.notify("derived");
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_every_subscriber_sees_the_change() {
        let mut p = Probe::default();
        let (_, a) = record(&mut p);
        let (_, b) = record(&mut p);
        assert_eq!(p.subscriber_count(), 2);

        set_property!(&mut p, level, 1);
        assert_eq!(a.borrow().len(), 1);
        assert_eq!(b.borrow().len(), 1);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut p = Probe::default();
        let (id, seen) = record(&mut p);

        assert!(p.unsubscribe(id));
        assert!(!p.unsubscribe(id));
        set_property!(&mut p, level, 9);
        assert!(seen.borrow().is_empty());
        assert_eq!(p.subscriber_count(), 0);
    }

    #[test]
    fn test_subscriber_reads_new_value() {
        let mut p = Probe::default();
        let observed = Rc::new(RefCell::new(None));
        let observed_clone = observed.clone();
        p.subscribe(move |state: &Probe, prop| {
            if prop == "level" {
                *observed_clone.borrow_mut() = Some(state.level);
            }
        });

        set_property!(&mut p, level, 7);
        assert_eq!(*observed.borrow(), Some(7));
    }

    #[test]
    fn test_collection_push_and_remove_item() {
        let mut v = ObservableVec::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let events_clone = events.clone();
        v.subscribe(move |c: &CollectionChange<'_, u32>| {
            let e = match c {
                CollectionChange::Added { index, item } => ('+', *index, **item),
                CollectionChange::Removed { index, item } => ('-', *index, **item),
                _ => ('?', 0, 0),
            };
            events_clone.borrow_mut().push(e);
        });

        v.push(5);
        v.push(6);
        v.push(5);
        assert_eq!(v.remove_item(&5), Some(5));
        assert_eq!(&*v, &[6, 5]);
        assert_eq!(
            *events.borrow(),
            vec![('+', 0, 5), ('+', 1, 6), ('+', 2, 5), ('-', 0, 5)]
        );
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("nope"), Color::BLACK);
    }

    #[test]
    fn test_color_parse_errors() {
        assert_eq!("#123".parse::<Color>(), Err(ColorParseError::Length(3)));
        assert_eq!(
            "#GG0000".parse::<Color>(),
            Err(ColorParseError::Digit("#GG0000".to_string()))
        );
        assert_eq!("#008000".parse::<Color>(), Ok(Color::GREEN));
    }

    #[test]
    fn test_color_parse_rejects_signs() {
        // from_str_radix alone would accept "+F" as 15
        assert_eq!(
            "+F0000".parse::<Color>(),
            Err(ColorParseError::Digit("+F0000".to_string()))
        );
        assert_eq!(
            "#FF00+F".parse::<Color>(),
            Err(ColorParseError::Digit("#FF00+F".to_string()))
        );
        assert!("#-10000".parse::<Color>().is_err());
        assert_eq!(Color::from_hex("+F0000"), Color::BLACK);
    }

    #[test]
    fn test_color_from_components() {
        assert_eq!(Color::from_rgb(0, 0, 255), Color::BLUE);
        assert_eq!(Color::from_rgba(255, 0, 0, 255), Color::RED);
        assert_eq!(Color::RED.with_alpha(0), Color::from_rgba(255, 0, 0, 0));
    }

    #[test]
    fn test_color_to_hex() {
        assert_eq!(Color::YELLOW.to_hex(), "#FFFF00");
        assert_eq!(Color::BLUE.with_alpha(0x80).to_string(), "#0000FF80");
    }
}
