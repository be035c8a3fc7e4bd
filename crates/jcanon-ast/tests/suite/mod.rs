mod ownership_props;
